//! # fleetops-entity
//!
//! Domain entity models for the FleetOps batch engine. Every struct in
//! this crate represents a database table row or a domain value object.
//! All entities derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and
//! database entities additionally derive `sqlx::FromRow`.
//!
//! The schema itself is owned by the dispatcher dashboard application;
//! this service only reads and writes existing tables.

pub mod driver;
pub mod load;
pub mod maintenance;
pub mod truck;
