//! Load materialization from a template and a target date.

use chrono::{DateTime, NaiveDate, Utc};

use fleetops_entity::load::model::NewLoad;
use fleetops_entity::load::status::LoadStatus;
use fleetops_entity::load::template::RecurringLoadTemplate;

/// Fixed wall-clock pickup hour for generated loads.
const PICKUP_HOUR: u32 = 8;
/// Fixed wall-clock delivery hour for generated loads.
const DELIVERY_HOUR: u32 = 17;

/// Expand a matched template into a fully-populated load for the target
/// date.
///
/// Pickup lands at 08:00 and delivery at 17:00 of the same calendar
/// day; multi-day lanes are not modeled. Financial, address, and
/// contact fields copy verbatim from the template. The load starts
/// `ASSIGNED` only when the template carries both a default driver and
/// a default truck.
pub fn materialize(
    template: &RecurringLoadTemplate,
    date: NaiveDate,
    load_number: String,
) -> NewLoad {
    let status = if template.has_default_assignment() {
        LoadStatus::Assigned
    } else {
        LoadStatus::Available
    };

    NewLoad {
        load_number,
        pickup_address: template.pickup_address.clone(),
        pickup_city: template.pickup_city.clone(),
        pickup_state: template.pickup_state.clone(),
        pickup_zip: template.pickup_zip.clone(),
        pickup_contact_name: template.pickup_contact_name.clone(),
        pickup_contact_phone: template.pickup_contact_phone.clone(),
        scheduled_pickup_date: at_hour(date, PICKUP_HOUR),
        delivery_address: template.delivery_address.clone(),
        delivery_city: template.delivery_city.clone(),
        delivery_state: template.delivery_state.clone(),
        delivery_zip: template.delivery_zip.clone(),
        delivery_contact_name: template.delivery_contact_name.clone(),
        delivery_contact_phone: template.delivery_contact_phone.clone(),
        scheduled_delivery_date: at_hour(date, DELIVERY_HOUR),
        distance: template.distance,
        deadhead_distance: template.deadhead_distance,
        load_rate: template.load_rate,
        custom_rate_per_distance: template.custom_rate_per_distance,
        detention_time: template.detention_time,
        detention_pay: template.detention_pay,
        notes: template.notes.clone(),
        special_instructions: template.special_instructions.clone(),
        driver_id: template.driver_id,
        truck_id: template.truck_id,
        status,
        is_recurring: true,
        recurring_group_id: Some(template.recurring_group_id),
    }
}

/// Timestamp for `date` at the given whole hour.
fn at_hour(date: NaiveDate, hour: u32) -> DateTime<Utc> {
    // Infallible for hour < 24.
    date.and_hms_opt(hour, 0, 0)
        .expect("whole hour is a valid wall-clock time")
        .and_utc()
}
