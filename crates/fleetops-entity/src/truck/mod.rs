//! Truck domain entities.

pub mod model;

pub use model::Truck;
