//! Recurrence frequency enumeration for load templates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use fleetops_core::error::AppError;

/// How often a recurring load template fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "RecurringFrequency", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecurrenceFrequency {
    /// Fires every calendar day.
    Daily,
    /// Fires on the template's day of week (0=Sunday..6=Saturday).
    Weekly,
    /// Fires on the template's day of month (1-31).
    Monthly,
}

impl RecurrenceFrequency {
    /// Return the frequency as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "DAILY",
            Self::Weekly => "WEEKLY",
            Self::Monthly => "MONTHLY",
        }
    }
}

impl fmt::Display for RecurrenceFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecurrenceFrequency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DAILY" => Ok(Self::Daily),
            "WEEKLY" => Ok(Self::Weekly),
            "MONTHLY" => Ok(Self::Monthly),
            other => Err(AppError::validation(format!(
                "Unknown recurrence frequency: '{other}'"
            ))),
        }
    }
}
