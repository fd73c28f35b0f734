//! # fleetops-database
//!
//! PostgreSQL database connection management and concrete repository
//! implementations for all FleetOps entities. The schema is owned by
//! the dispatcher dashboard application; no migrations run here.

pub mod connection;
pub mod repositories;

pub use connection::DatabasePool;
