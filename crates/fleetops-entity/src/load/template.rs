//! Recurring load template entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::frequency::RecurrenceFrequency;

/// A reusable blueprint for a recurring freight lane.
///
/// Templates are created and edited by dispatcher tooling; the batch
/// engine consumes them read-only apart from stamping
/// `last_generated_at` after each firing (advisory audit trail only,
/// never read back for dedup decisions).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecurringLoadTemplate {
    /// Unique template identifier.
    pub id: Uuid,
    /// How often the template fires.
    pub frequency: RecurrenceFrequency,
    /// Day of week the template fires on (0=Sunday..6, WEEKLY only).
    pub day_of_week: Option<i32>,
    /// Day of month the template fires on (1-31, MONTHLY only).
    pub day_of_month: Option<i32>,
    /// Whether the template participates in generation.
    pub is_active: bool,

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

    /// Loaded distance for the lane.
    pub distance: f64,
    /// Deadhead (empty) distance to the pickup.
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

    /// Default driver assignment.
    pub driver_id: Option<Uuid>,
    /// Default truck assignment.
    pub truck_id: Option<Uuid>,

    /// Correlates all loads spawned from this template.
    pub recurring_group_id: Uuid,
    /// When the template last produced a load.
    pub last_generated_at: Option<DateTime<Utc>>,

    /// When the template was created.
    pub created_at: DateTime<Utc>,
    /// When the template was last updated.
    pub updated_at: DateTime<Utc>,
}

impl RecurringLoadTemplate {
    /// Check if the template carries a complete default assignment.
    pub fn has_default_assignment(&self) -> bool {
        self.driver_id.is_some() && self.truck_id.is_some()
    }
}
