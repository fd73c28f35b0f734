//! Load entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::LoadStatus;

/// A concrete, dated shipment instance.
///
/// Loads materialized by the batch engine are created once and never
/// rewritten by it afterward; the dispatcher workflow owns all later
/// status and assignment mutations.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Load {
    /// Unique load identifier.
    pub id: Uuid,
    /// Human-facing load number, `LOAD-<year>-<4-digit-sequence>`.
    pub load_number: String,

    /// Pickup street address.
    pub pickup_address: String,
    /// Pickup city.
    pub pickup_city: String,
    /// Pickup state/province.
    pub pickup_state: String,
    /// Pickup postal code.
    pub pickup_zip: String,
    /// Pickup contact name.
    pub pickup_contact_name: Option<String>,
    /// Pickup contact phone.
    pub pickup_contact_phone: Option<String>,
    /// Scheduled pickup time.
    pub scheduled_pickup_date: DateTime<Utc>,

    /// Delivery street address.
    pub delivery_address: String,
    /// Delivery city.
    pub delivery_city: String,
    /// Delivery state/province.
    pub delivery_state: String,
    /// Delivery postal code.
    pub delivery_zip: String,
    /// Delivery contact name.
    pub delivery_contact_name: Option<String>,
    /// Delivery contact phone.
    pub delivery_contact_phone: Option<String>,
    /// Scheduled delivery time.
    pub scheduled_delivery_date: DateTime<Utc>,

    /// Loaded distance.
    pub distance: f64,
    /// Deadhead (empty) distance.
    pub deadhead_distance: f64,
    /// Flat rate for the load.
    pub load_rate: f64,
    /// Optional per-distance rate override.
    pub custom_rate_per_distance: Option<f64>,
    /// Detention time allowance in hours.
    pub detention_time: Option<f64>,
    /// Detention pay rate.
    pub detention_pay: Option<f64>,

    /// Free-text notes.
    pub notes: Option<String>,
    /// Special handling instructions.
    pub special_instructions: Option<String>,

    /// Assigned driver.
    pub driver_id: Option<Uuid>,
    /// Assigned truck.
    pub truck_id: Option<Uuid>,
    /// Current lifecycle status.
    pub status: LoadStatus,

    /// Whether this load was spawned from a recurring template.
    pub is_recurring: bool,
    /// Back-reference to the spawning template's group.
    pub recurring_group_id: Option<Uuid>,

    /// When the load was created.
    pub created_at: DateTime<Utc>,
    /// When the load was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLoad {
    /// Human-facing load number.
    pub load_number: String,
    /// Pickup street address.
    pub pickup_address: String,
    /// Pickup city.
    pub pickup_city: String,
    /// Pickup state/province.
    pub pickup_state: String,
    /// Pickup postal code.
    pub pickup_zip: String,
    /// Pickup contact name.
    pub pickup_contact_name: Option<String>,
    /// Pickup contact phone.
    pub pickup_contact_phone: Option<String>,
    /// Scheduled pickup time.
    pub scheduled_pickup_date: DateTime<Utc>,
    /// Delivery street address.
    pub delivery_address: String,
    /// Delivery city.
    pub delivery_city: String,
    /// Delivery state/province.
    pub delivery_state: String,
    /// Delivery postal code.
    pub delivery_zip: String,
    /// Delivery contact name.
    pub delivery_contact_name: Option<String>,
    /// Delivery contact phone.
    pub delivery_contact_phone: Option<String>,
    /// Scheduled delivery time.
    pub scheduled_delivery_date: DateTime<Utc>,
    /// Loaded distance.
    pub distance: f64,
    /// Deadhead (empty) distance.
    pub deadhead_distance: f64,
    /// Flat rate for the load.
    pub load_rate: f64,
    /// Optional per-distance rate override.
    pub custom_rate_per_distance: Option<f64>,
    /// Detention time allowance in hours.
    pub detention_time: Option<f64>,
    /// Detention pay rate.
    pub detention_pay: Option<f64>,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Special handling instructions.
    pub special_instructions: Option<String>,
    /// Assigned driver.
    pub driver_id: Option<Uuid>,
    /// Assigned truck.
    pub truck_id: Option<Uuid>,
    /// Initial lifecycle status.
    pub status: LoadStatus,
    /// Whether this load was spawned from a recurring template.
    pub is_recurring: bool,
    /// Back-reference to the spawning template's group.
    pub recurring_group_id: Option<Uuid>,
}

/// Minimal projection of a freshly created load, reported by a
/// generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedLoad {
    /// Unique load identifier.
    pub id: Uuid,
    /// Human-facing load number.
    pub load_number: String,
}
