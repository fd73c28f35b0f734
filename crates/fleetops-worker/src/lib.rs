//! # fleetops-worker
//!
//! The FleetOps batch engine:
//! - Recurring load generation (schedule matching, sequence allocation,
//!   load materialization) for a given calendar date
//! - Compliance and maintenance scanning with threshold-crossing alerts
//! - A cron scheduler that triggers both jobs once per day
//!
//! Every component receives its storage and dispatch collaborators as
//! explicitly injected ports, so tests can substitute in-memory fakes.

pub mod alerts;
pub mod recurring;
pub mod scheduler;
pub mod store;

pub use alerts::engine::AlertEngine;
pub use recurring::generator::RecurringLoadGenerator;
pub use scheduler::CronScheduler;
