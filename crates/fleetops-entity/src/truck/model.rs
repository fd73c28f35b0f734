//! Truck entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A power unit in the fleet.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Truck {
    /// Unique truck identifier.
    pub id: Uuid,
    /// Fleet-assigned unit number.
    pub truck_number: String,
    /// Registration expiry.
    pub registration_expiry: Option<DateTime<Utc>>,
    /// Insurance policy expiry.
    pub insurance_expiry: Option<DateTime<Utc>>,
    /// Last reported odometer reading in km.
    pub current_mileage: Option<i32>,
    /// Whether the truck is in active service.
    pub is_active: bool,
}
