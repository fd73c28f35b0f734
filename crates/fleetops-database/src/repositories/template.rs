//! Recurring load template repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use fleetops_core::error::{AppError, ErrorKind};
use fleetops_core::result::AppResult;
use fleetops_entity::load::template::RecurringLoadTemplate;

/// Repository for recurring load template access.
#[derive(Debug, Clone)]
pub struct TemplateRepository {
    pool: PgPool,
}

impl TemplateRepository {
    /// Create a new template repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a template by its primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<RecurringLoadTemplate>> {
        sqlx::query_as::<_, RecurringLoadTemplate>(
            "SELECT * FROM recurring_load_templates WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find template", e))
    }

    /// List all active templates in storage-default order.
    pub async fn find_active(&self) -> AppResult<Vec<RecurringLoadTemplate>> {
        sqlx::query_as::<_, RecurringLoadTemplate>(
            "SELECT * FROM recurring_load_templates WHERE is_active = TRUE",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list active templates", e)
        })
    }

    /// Stamp a template's last generation time.
    pub async fn mark_generated(&self, id: Uuid, at: DateTime<Utc>) -> AppResult<()> {
        sqlx::query(
            "UPDATE recurring_load_templates SET last_generated_at = $2, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to stamp last_generated_at", e)
        })?;
        Ok(())
    }
}
