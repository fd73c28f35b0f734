//! Maintenance record entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A maintenance log entry for a truck.
///
/// `next_service_due` is an odometer reading in km; the maintenance
/// scanner compares it against the truck's `current_mileage`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaintenanceRecord {
    /// Unique record identifier.
    pub id: Uuid,
    /// The truck this record belongs to.
    pub truck_id: Uuid,
    /// Service type (oil change, brake inspection, ...).
    pub service_type: String,
    /// Odometer reading at which the next service is due.
    pub next_service_due: Option<i32>,
    /// Free-text notes.
    pub notes: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}
