//! Batch job scheduling configuration.

use serde::{Deserialize, Serialize};

/// Cron schedule configuration for the two daily batch jobs.
///
/// Both scans assume gap-free daily execution: the compliance scanner
/// matches countdown thresholds on exactly one calendar day, so a
/// skipped day silently skips the alert. Do not widen these cadences
/// past once per day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Run both jobs immediately on startup (operational testing).
    #[serde(default)]
    pub run_on_startup: bool,
    /// Cron expression for recurring load generation (default: daily 00:00).
    #[serde(default = "default_loads_cron")]
    pub recurring_loads_cron: String,
    /// Cron expression for compliance/maintenance alerts (default: daily 06:30).
    #[serde(default = "default_alerts_cron")]
    pub alerts_cron: String,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            run_on_startup: false,
            recurring_loads_cron: default_loads_cron(),
            alerts_cron: default_alerts_cron(),
        }
    }
}

fn default_loads_cron() -> String {
    "0 0 0 * * *".to_string()
}

fn default_alerts_cron() -> String {
    "0 30 6 * * *".to_string()
}
