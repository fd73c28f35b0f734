//! Recurring load generation pipeline.
//!
//! Schedule matching selects the templates due on a date, the sequence
//! allocator continues the year's `LOAD-<year>-NNNN` numbering, and the
//! materializer expands each template into a concrete load row. The
//! generator orchestrates the three for one daily batch run.

pub mod generator;
pub mod materialize;
pub mod schedule;
pub mod sequence;

pub use generator::{GenerationOutcome, RecurringLoadGenerator};
