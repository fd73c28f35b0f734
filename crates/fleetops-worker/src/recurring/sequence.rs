//! Load number sequence allocation.
//!
//! Load numbers follow `LOAD-<year>-<4-digit-sequence>` with the
//! sequence unique per year. Allocation inspects only the single
//! highest-sorted existing number for the year; a malformed suffix on
//! that record degrades to restarting at 1 (accepted limitation, since
//! the dashboard never writes non-numeric suffixes).

/// Compute the next sequence number given the highest-sorted existing
/// load number for the year, or 1 when none exists or its suffix does
/// not parse.
pub fn next_sequence(last_load_number: Option<&str>) -> u32 {
    last_load_number
        .and_then(|number| number.split('-').nth(2))
        .and_then(|suffix| suffix.parse::<u32>().ok())
        .map(|last| last + 1)
        .unwrap_or(1)
}

/// Format a load number from its year and sequence.
pub fn format_load_number(year: i32, sequence: u32) -> String {
    format!("LOAD-{year}-{sequence:04}")
}
