//! Driver repository implementation.

use sqlx::PgPool;

use fleetops_core::error::{AppError, ErrorKind};
use fleetops_core::result::AppResult;
use fleetops_entity::driver::model::Driver;

/// Repository for driver compliance reads.
#[derive(Debug, Clone)]
pub struct DriverRepository {
    pool: PgPool,
}

impl DriverRepository {
    /// Create a new driver repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every driver on the roster with their user names joined in.
    pub async fn find_all(&self) -> AppResult<Vec<Driver>> {
        sqlx::query_as::<_, Driver>(
            "SELECT d.id, u.first_name, u.last_name, d.cdl_expiry, d.medical_card_expiry \
             FROM drivers d JOIN users u ON u.id = d.user_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list drivers", e))
    }
}
