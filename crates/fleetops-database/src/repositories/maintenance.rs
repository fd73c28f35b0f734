//! Maintenance record repository implementation.

use sqlx::PgPool;

use fleetops_core::error::{AppError, ErrorKind};
use fleetops_core::result::AppResult;
use fleetops_entity::maintenance::model::MaintenanceRecord;

/// Repository for maintenance record reads.
#[derive(Debug, Clone)]
pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    /// Create a new maintenance repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every record that has a next-service odometer target set.
    pub async fn find_with_service_due(&self) -> AppResult<Vec<MaintenanceRecord>> {
        sqlx::query_as::<_, MaintenanceRecord>(
            "SELECT * FROM maintenance_records WHERE next_service_due IS NOT NULL",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list maintenance records", e)
        })
    }
}
