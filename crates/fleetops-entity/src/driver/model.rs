//! Driver entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A driver on the fleet roster.
///
/// Only the compliance attributes the alerting engine reads are modeled
/// here; the name fields are denormalized from the dashboard's user
/// account so alerts can address the driver without a join.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Driver {
    /// Unique driver identifier.
    pub id: Uuid,
    /// Driver's first name.
    pub first_name: String,
    /// Driver's last name.
    pub last_name: String,
    /// CDL (commercial driver's license) expiry.
    pub cdl_expiry: Option<DateTime<Utc>>,
    /// DOT medical card expiry.
    pub medical_card_expiry: Option<DateTime<Utc>>,
}

impl Driver {
    /// Return the driver's display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
