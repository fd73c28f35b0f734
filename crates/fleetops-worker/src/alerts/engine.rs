//! Threshold alerting engine.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, warn};

use fleetops_core::error::AppError;
use fleetops_core::result::AppResult;
use fleetops_notify::dispatcher::{MessageDispatcher, MessageFormat};

use super::compliance::ComplianceScanner;
use super::maintenance::MaintenanceScanner;

/// Delivery counters for one alerting run.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct AlertRunSummary {
    /// Alerts successfully handed to the dispatcher.
    pub dispatched: usize,
    /// Alerts whose dispatch failed (logged and skipped).
    pub failed: usize,
}

/// Runs the compliance scan then the maintenance scan, dispatching each
/// emitted alert individually and immediately.
///
/// A failure dispatching one alert never stops the remaining alerts. A
/// storage-read failure is fatal for its scan category only: the other
/// category still runs, and the run as a whole reports the failure
/// afterward.
#[derive(Debug)]
pub struct AlertEngine {
    compliance: ComplianceScanner,
    maintenance: MaintenanceScanner,
    dispatcher: Arc<dyn MessageDispatcher>,
}

impl AlertEngine {
    /// Create a new engine over the given scanners and dispatcher.
    pub fn new(
        compliance: ComplianceScanner,
        maintenance: MaintenanceScanner,
        dispatcher: Arc<dyn MessageDispatcher>,
    ) -> Self {
        Self {
            compliance,
            maintenance,
            dispatcher,
        }
    }

    /// Execute one alerting run as of `now`.
    pub async fn run(&self, now: DateTime<Utc>) -> AppResult<AlertRunSummary> {
        let mut summary = AlertRunSummary::default();
        let mut scan_failures: Vec<AppError> = Vec::new();

        match self.compliance.scan(now).await {
            Ok(alerts) => {
                for alert in alerts {
                    self.dispatch(&alert.text, &mut summary).await;
                }
            }
            Err(e) => {
                error!(error = %e, "Compliance scan failed");
                scan_failures.push(e);
            }
        }

        match self.maintenance.scan().await {
            Ok(alerts) => {
                for alert in alerts {
                    self.dispatch(&alert.text, &mut summary).await;
                }
            }
            Err(e) => {
                error!(error = %e, "Maintenance scan failed");
                scan_failures.push(e);
            }
        }

        if !scan_failures.is_empty() {
            let detail = scan_failures
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(AppError::internal(format!("Alert scan failed: {detail}")));
        }

        Ok(summary)
    }

    /// Send one alert; a failure is logged and counted, never raised.
    async fn dispatch(&self, text: &str, summary: &mut AlertRunSummary) {
        match self
            .dispatcher
            .send_to_admin(text, MessageFormat::Html)
            .await
        {
            Ok(()) => summary.dispatched += 1,
            Err(e) => {
                warn!(error = %e, "Alert dispatch failed, continuing");
                summary.failed += 1;
            }
        }
    }
}
