//! Truck repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use fleetops_core::error::{AppError, ErrorKind};
use fleetops_core::result::AppResult;
use fleetops_entity::truck::model::Truck;

/// Repository for truck compliance reads.
#[derive(Debug, Clone)]
pub struct TruckRepository {
    pool: PgPool,
}

impl TruckRepository {
    /// Create a new truck repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a truck by its primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Truck>> {
        sqlx::query_as::<_, Truck>("SELECT * FROM trucks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find truck", e))
    }

    /// List all trucks in active service.
    pub async fn find_active(&self) -> AppResult<Vec<Truck>> {
        sqlx::query_as::<_, Truck>("SELECT * FROM trucks WHERE is_active = TRUE")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list active trucks", e)
            })
    }
}
