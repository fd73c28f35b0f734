//! Compliance and maintenance alerting.
//!
//! The compliance scanner matches document-expiry countdowns against
//! exact-day thresholds; the maintenance scanner uses an open-ended
//! at-or-below distance window. The engine runs both and dispatches
//! each alert individually through the message dispatcher.

pub mod compliance;
pub mod engine;
pub mod maintenance;

pub use engine::{AlertEngine, AlertRunSummary};
