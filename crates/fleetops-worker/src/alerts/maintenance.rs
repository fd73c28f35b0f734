//! Maintenance distance scanning.
//!
//! Unlike the compliance scanner's exact-day matching, this uses an
//! open-ended at-or-below window: every run in which a record sits
//! within the threshold distance emits a fresh alert. No dedup state is
//! kept (preserved reference behavior, see DESIGN.md).

use std::sync::Arc;

use fleetops_core::result::AppResult;
use fleetops_entity::maintenance::model::MaintenanceRecord;
use fleetops_entity::truck::model::Truck;
use fleetops_notify::message;

use crate::store::{MaintenanceStore, TruckStore};

/// Distance window (km) at or below which a maintenance alert fires.
pub const MAINTENANCE_DISTANCE_THRESHOLD_KM: i32 = 500;

/// One maintenance alert ready for dispatch.
#[derive(Debug, Clone)]
pub struct MaintenanceAlert {
    /// Whether the service target has already been passed.
    pub overdue: bool,
    /// Distance remaining to the service target (negative when overdue).
    pub remaining_km: i32,
    /// Formatted message text.
    pub text: String,
}

/// Evaluate one record against its truck's odometer. Returns `None`
/// when the record has no service target, the truck's mileage is
/// unknown, or the target is still beyond the window.
pub fn evaluate_record(record: &MaintenanceRecord, truck: &Truck) -> Option<MaintenanceAlert> {
    let due = record.next_service_due?;
    let mileage = truck.current_mileage?;

    let remaining = due - mileage;
    if remaining > MAINTENANCE_DISTANCE_THRESHOLD_KM {
        return None;
    }

    Some(MaintenanceAlert {
        overdue: remaining <= 0,
        remaining_km: remaining,
        text: message::maintenance_due(&truck.truck_number, &record.service_type, mileage, remaining),
    })
}

/// Walks maintenance records, collecting distance-window alerts.
/// Never mutates storage.
#[derive(Debug)]
pub struct MaintenanceScanner {
    records: Arc<dyn MaintenanceStore>,
    trucks: Arc<dyn TruckStore>,
}

impl MaintenanceScanner {
    /// Create a new scanner over the given stores.
    pub fn new(records: Arc<dyn MaintenanceStore>, trucks: Arc<dyn TruckStore>) -> Self {
        Self { records, trucks }
    }

    /// Scan every record that has a service target set.
    pub async fn scan(&self) -> AppResult<Vec<MaintenanceAlert>> {
        let mut alerts = Vec::new();

        for record in self.records.find_with_service_due().await? {
            let Some(truck) = self.trucks.find_by_id(record.truck_id).await? else {
                continue;
            };
            if let Some(alert) = evaluate_record(&record, &truck) {
                alerts.push(alert);
            }
        }

        Ok(alerts)
    }
}
