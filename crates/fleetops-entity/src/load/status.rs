//! Load status enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use fleetops_core::error::AppError;

/// Lifecycle status of a freight load.
///
/// The batch engine only ever writes `Available` or `Assigned`; the
/// remaining states belong to the dispatcher workflow downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "LoadStatus", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoadStatus {
    /// Created but not yet assigned to a driver/truck pair.
    Available,
    /// Assigned to a driver and truck.
    Assigned,
    /// Accepted by the driver.
    Accepted,
    /// Freight picked up.
    PickedUp,
    /// En route to delivery.
    InTransit,
    /// Delivered to the consignee.
    Delivered,
    /// Paperwork closed out.
    Completed,
    /// Cancelled by dispatch.
    Cancelled,
}

impl LoadStatus {
    /// Check if the load is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Return the status as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Assigned => "ASSIGNED",
            Self::Accepted => "ACCEPTED",
            Self::PickedUp => "PICKED_UP",
            Self::InTransit => "IN_TRANSIT",
            Self::Delivered => "DELIVERED",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LoadStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AVAILABLE" => Ok(Self::Available),
            "ASSIGNED" => Ok(Self::Assigned),
            "ACCEPTED" => Ok(Self::Accepted),
            "PICKED_UP" => Ok(Self::PickedUp),
            "IN_TRANSIT" => Ok(Self::InTransit),
            "DELIVERED" => Ok(Self::Delivered),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELLED" => Ok(Self::Cancelled),
            other => Err(AppError::validation(format!(
                "Unknown load status: '{other}'"
            ))),
        }
    }
}
