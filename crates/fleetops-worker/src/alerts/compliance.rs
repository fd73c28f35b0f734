//! Driver and truck compliance scanning.
//!
//! Thresholds are exact-day matches, not "at most N days" windows: an
//! alert fires only on the one calendar day the countdown equals 30, 15,
//! or 7 days remaining. The scan therefore must run daily without gaps,
//! or a threshold is silently skipped (deployment requirement, not
//! compensated for here).

use std::sync::Arc;

use chrono::{DateTime, Utc};

use fleetops_core::result::AppResult;
use fleetops_entity::driver::model::Driver;
use fleetops_entity::truck::model::Truck;
use fleetops_notify::message::{self, AlertSeverity, DocumentKind};

use crate::store::{DriverStore, TruckStore};

/// Day counts at which a compliance alert fires.
pub const COMPLIANCE_THRESHOLDS: [i64; 3] = [30, 15, 7];

/// Whole days until `expiry`, rounded up from any fraction — the same
/// millisecond-ceiling arithmetic the dashboard uses, so both systems
/// agree on which calendar day a threshold lands.
pub fn days_until(now: DateTime<Utc>, expiry: DateTime<Utc>) -> i64 {
    let millis = (expiry - now).num_milliseconds();
    (millis as f64 / 86_400_000.0).ceil() as i64
}

/// Check whether a countdown sits exactly on an alert threshold.
pub fn threshold_hit(days: i64) -> bool {
    COMPLIANCE_THRESHOLDS.contains(&days)
}

/// One compliance alert ready for dispatch.
#[derive(Debug, Clone)]
pub struct ComplianceAlert {
    /// The expiring document.
    pub document: DocumentKind,
    /// Severity band (formatting only).
    pub severity: AlertSeverity,
    /// Formatted message text.
    pub text: String,
}

/// Evaluate one driver's documents against the thresholds.
pub fn evaluate_driver(driver: &Driver, now: DateTime<Utc>) -> Vec<ComplianceAlert> {
    let mut alerts = Vec::new();

    let documents = [
        (DocumentKind::Cdl, driver.cdl_expiry),
        (DocumentKind::MedicalCard, driver.medical_card_expiry),
    ];

    for (document, expiry) in documents {
        let Some(expiry) = expiry else { continue };
        let days = days_until(now, expiry);
        if threshold_hit(days) {
            alerts.push(ComplianceAlert {
                document,
                severity: AlertSeverity::for_days_until(days),
                text: message::driver_document_expiring(
                    &driver.full_name(),
                    document,
                    expiry,
                    days,
                ),
            });
        }
    }

    alerts
}

/// Evaluate one truck's documents against the thresholds.
pub fn evaluate_truck(truck: &Truck, now: DateTime<Utc>) -> Vec<ComplianceAlert> {
    let mut alerts = Vec::new();

    let documents = [
        (DocumentKind::Registration, truck.registration_expiry),
        (DocumentKind::Insurance, truck.insurance_expiry),
    ];

    for (document, expiry) in documents {
        let Some(expiry) = expiry else { continue };
        let days = days_until(now, expiry);
        if threshold_hit(days) {
            alerts.push(ComplianceAlert {
                document,
                severity: AlertSeverity::for_days_until(days),
                text: message::truck_document_expiring(&truck.truck_number, document, expiry, days),
            });
        }
    }

    alerts
}

/// Walks drivers and active trucks, collecting threshold-crossing
/// alerts. Never mutates storage.
#[derive(Debug)]
pub struct ComplianceScanner {
    drivers: Arc<dyn DriverStore>,
    trucks: Arc<dyn TruckStore>,
}

impl ComplianceScanner {
    /// Create a new scanner over the given stores.
    pub fn new(drivers: Arc<dyn DriverStore>, trucks: Arc<dyn TruckStore>) -> Self {
        Self { drivers, trucks }
    }

    /// Scan every driver and active truck as of `now`.
    pub async fn scan(&self, now: DateTime<Utc>) -> AppResult<Vec<ComplianceAlert>> {
        let mut alerts = Vec::new();

        for driver in self.drivers.find_all().await? {
            alerts.extend(evaluate_driver(&driver, now));
        }

        for truck in self.trucks.find_active().await? {
            alerts.extend(evaluate_truck(&truck, now));
        }

        Ok(alerts)
    }
}
