//! Maintenance domain entities.

pub mod model;

pub use model::MaintenanceRecord;
