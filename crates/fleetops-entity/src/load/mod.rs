//! Freight load domain entities.

pub mod frequency;
pub mod model;
pub mod status;
pub mod template;

pub use frequency::RecurrenceFrequency;
pub use model::{CreatedLoad, Load, NewLoad};
pub use status::LoadStatus;
pub use template::RecurringLoadTemplate;
