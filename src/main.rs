//! FleetOps Cron — daily batch runner for the fleet-logistics back office.
//!
//! Wires the database repositories, the Telegram dispatcher, the
//! recurring load generator, and the alerting engine together, then
//! hands both jobs to the cron scheduler.

use std::sync::Arc;

use tracing;
use tracing_subscriber::{fmt, EnvFilter};

use fleetops_core::config::AppConfig;
use fleetops_core::error::AppError;
use fleetops_database::repositories::{
    DriverRepository, LoadRepository, MaintenanceRepository, TemplateRepository, TruckRepository,
};
use fleetops_database::DatabasePool;
use fleetops_notify::TelegramDispatcher;
use fleetops_worker::alerts::compliance::ComplianceScanner;
use fleetops_worker::alerts::maintenance::MaintenanceScanner;
use fleetops_worker::store::TruckStore;
use fleetops_worker::{AlertEngine, CronScheduler, RecurringLoadGenerator};

#[tokio::main]
async fn main() {
    let env = std::env::var("FLEETOPS_ENV").unwrap_or_else(|_| "development".to_string());
    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting FleetOps cron v{}", env!("CARGO_PKG_VERSION"));

    let db = DatabasePool::connect(&config.database).await?;
    db.health_check().await?;
    let pool = db.pool().clone();

    let templates = Arc::new(TemplateRepository::new(pool.clone()));
    let loads = Arc::new(LoadRepository::new(pool.clone()));
    let drivers = Arc::new(DriverRepository::new(pool.clone()));
    let trucks: Arc<dyn TruckStore> = Arc::new(TruckRepository::new(pool.clone()));
    let maintenance = Arc::new(MaintenanceRepository::new(pool));

    let dispatcher = Arc::new(TelegramDispatcher::new(&config.telegram)?);
    if config.telegram.bot_token.is_none() || config.telegram.admin_chat_id.is_none() {
        tracing::warn!("Telegram credentials missing: alert dispatch will fail per message");
    }

    let generator = Arc::new(RecurringLoadGenerator::new(templates, loads));
    let engine = Arc::new(AlertEngine::new(
        ComplianceScanner::new(drivers, Arc::clone(&trucks)),
        MaintenanceScanner::new(maintenance, trucks),
        dispatcher,
    ));

    let mut scheduler = CronScheduler::new(config.scheduler.clone(), generator, engine).await?;
    scheduler.register_default_tasks().await?;
    scheduler.start().await?;

    if config.scheduler.run_on_startup {
        tracing::info!("run_on_startup enabled, executing both jobs now");
        scheduler.run_startup_jobs().await;
    }

    wait_for_shutdown().await;

    scheduler.shutdown().await?;
    db.close().await;
    Ok(())
}

/// Block until SIGINT or SIGTERM
async fn wait_for_shutdown() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                let _ = tokio::signal::ctrl_c().await;
                return;
            }
        };

        tokio::select! {
            _ = tokio::signal::ctrl_c() => tracing::info!("Received SIGINT, shutting down"),
            _ = sigterm.recv() => tracing::info!("Received SIGTERM, shutting down"),
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
        tracing::info!("Received Ctrl-C, shutting down");
    }
}
