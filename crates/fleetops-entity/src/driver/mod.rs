//! Driver domain entities.

pub mod model;

pub use model::Driver;
