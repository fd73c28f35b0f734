//! Cron scheduler for the daily batch jobs.

use std::sync::Arc;

use chrono::Utc;
use tokio_cron_scheduler::{Job as CronJob, JobScheduler};
use tracing;

use fleetops_core::config::scheduler::SchedulerConfig;
use fleetops_core::error::AppError;

use crate::alerts::engine::AlertEngine;
use crate::recurring::generator::RecurringLoadGenerator;

/// Cron-based scheduler for the two daily batch jobs.
///
/// Runs are expected to finish well inside the 24h cadence; overlapping
/// runs are not designed for. A failed run is logged and never kills
/// the scheduler.
pub struct CronScheduler {
    /// The underlying job scheduler
    scheduler: JobScheduler,
    /// Recurring load generator
    generator: Arc<RecurringLoadGenerator>,
    /// Alerting engine
    engine: Arc<AlertEngine>,
    /// Schedule configuration
    config: SchedulerConfig,
}

impl std::fmt::Debug for CronScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CronScheduler").finish()
    }
}

impl CronScheduler {
    /// Create a new cron scheduler
    pub async fn new(
        config: SchedulerConfig,
        generator: Arc<RecurringLoadGenerator>,
        engine: Arc<AlertEngine>,
    ) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::internal(format!("Failed to create scheduler: {}", e)))?;

        Ok(Self {
            scheduler,
            generator,
            engine,
            config,
        })
    }

    /// Register both daily tasks
    pub async fn register_default_tasks(&self) -> Result<(), AppError> {
        self.register_recurring_loads().await?;
        self.register_alerts().await?;

        tracing::info!("All scheduled tasks registered");
        Ok(())
    }

    /// Start the scheduler
    pub async fn start(&self) -> Result<(), AppError> {
        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::internal(format!("Failed to start scheduler: {}", e)))?;

        tracing::info!("Cron scheduler started");
        Ok(())
    }

    /// Shutdown the scheduler
    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::internal(format!("Failed to shutdown scheduler: {}", e)))?;

        tracing::info!("Cron scheduler shut down");
        Ok(())
    }

    /// Run both jobs immediately (startup override for operational
    /// testing), sequentially and in the daily order.
    pub async fn run_startup_jobs(&self) {
        run_recurring_loads(&self.generator).await;
        run_alerts(&self.engine).await;
    }

    /// Recurring load generation — daily at midnight by default
    async fn register_recurring_loads(&self) -> Result<(), AppError> {
        let generator = Arc::clone(&self.generator);
        let job = CronJob::new_async(
            self.config.recurring_loads_cron.as_str(),
            move |_uuid, _lock| {
                let generator = Arc::clone(&generator);
                Box::pin(async move {
                    run_recurring_loads(&generator).await;
                })
            },
        )
        .map_err(|e| {
            AppError::internal(format!("Failed to create recurring_loads schedule: {}", e))
        })?;

        self.scheduler.add(job).await.map_err(|e| {
            AppError::internal(format!("Failed to add recurring_loads schedule: {}", e))
        })?;

        tracing::info!(
            "Registered: recurring_loads ({})",
            self.config.recurring_loads_cron
        );
        Ok(())
    }

    /// Compliance & maintenance alerts — daily at 06:30 by default
    async fn register_alerts(&self) -> Result<(), AppError> {
        let engine = Arc::clone(&self.engine);
        let job = CronJob::new_async(self.config.alerts_cron.as_str(), move |_uuid, _lock| {
            let engine = Arc::clone(&engine);
            Box::pin(async move {
                run_alerts(&engine).await;
            })
        })
        .map_err(|e| AppError::internal(format!("Failed to create alerts schedule: {}", e)))?;

        self.scheduler
            .add(job)
            .await
            .map_err(|e| AppError::internal(format!("Failed to add alerts schedule: {}", e)))?;

        tracing::info!("Registered: alerts ({})", self.config.alerts_cron);
        Ok(())
    }
}

/// Run one load-generation pass for today's date, logging the outcome.
pub async fn run_recurring_loads(generator: &RecurringLoadGenerator) {
    let today = Utc::now().date_naive();
    tracing::info!(date = %today, "Running recurring load generation");

    match generator.generate_for_date(today).await {
        Ok(outcome) => {
            tracing::info!(created = outcome.created, "Recurring load generation complete");
        }
        Err(e) => {
            tracing::error!(error = %e, "Recurring load generation failed");
        }
    }
}

/// Run one alerting pass as of now, logging the outcome.
pub async fn run_alerts(engine: &AlertEngine) {
    tracing::info!("Running compliance & maintenance alerts");

    match engine.run(Utc::now()).await {
        Ok(summary) => {
            tracing::info!(
                dispatched = summary.dispatched,
                failed = summary.failed,
                "Alert run complete"
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "Alert run failed");
        }
    }
}
