//! Schedule matching for recurring load templates.

use chrono::{Datelike, NaiveDate};

use fleetops_entity::load::frequency::RecurrenceFrequency;
use fleetops_entity::load::template::RecurringLoadTemplate;

/// Check whether a template is due to fire on the given calendar date.
///
/// Day-of-week is 0-based from Sunday. MONTHLY templates with
/// `day_of_month = 31` never fire in shorter months; there is no
/// fallback to the last day of the month (known behavior).
pub fn is_due(template: &RecurringLoadTemplate, date: NaiveDate) -> bool {
    if !template.is_active {
        return false;
    }

    match template.frequency {
        RecurrenceFrequency::Daily => true,
        RecurrenceFrequency::Weekly => {
            template.day_of_week == Some(date.weekday().num_days_from_sunday() as i32)
        }
        RecurrenceFrequency::Monthly => template.day_of_month == Some(date.day() as i32),
    }
}
