//! Alert message templates.
//!
//! All outbound text is composed here so the batch jobs never build
//! strings inline. Messages use Telegram HTML rich-text markers and the
//! emoji conventions the dispatch office is used to.

use chrono::{DateTime, Utc};

/// Severity band for a compliance countdown — formatting only, no
/// behavioral branching beyond wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSeverity {
    /// 16-30 days remaining.
    Informational,
    /// 8-15 days remaining.
    Warning,
    /// 7 days or less remaining.
    Urgent,
}

impl AlertSeverity {
    /// Classify a days-until-expiry countdown.
    pub fn for_days_until(days: i64) -> Self {
        if days <= 7 {
            Self::Urgent
        } else if days <= 15 {
            Self::Warning
        } else {
            Self::Informational
        }
    }

    /// Leading emoji marker for this severity.
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Urgent => "\u{1F534}",        // red circle
            Self::Warning => "\u{26A0}\u{FE0F}", // warning sign
            Self::Informational => "\u{1F4CB}",  // clipboard
        }
    }
}

/// Regulatory document kinds tracked by the compliance scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Commercial driver's license.
    Cdl,
    /// DOT medical card.
    MedicalCard,
    /// Vehicle registration.
    Registration,
    /// Insurance policy.
    Insurance,
}

impl DocumentKind {
    /// Display name used in alert text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cdl => "CDL",
            Self::MedicalCard => "Medical card",
            Self::Registration => "Registration",
            Self::Insurance => "Insurance",
        }
    }
}

/// Format an expiry date the way the dispatch office reads it.
pub fn format_expiry(date: DateTime<Utc>) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Driver compliance document expiring.
pub fn driver_document_expiring(
    driver_name: &str,
    document: DocumentKind,
    expiry: DateTime<Utc>,
    days_until: i64,
) -> String {
    let severity = AlertSeverity::for_days_until(days_until);
    let urgent = severity == AlertSeverity::Urgent;

    let mut lines = vec![
        format!(
            "{} <b>{}Compliance Document Expiring</b>",
            severity.emoji(),
            if urgent { "URGENT: " } else { "" }
        ),
        String::new(),
        format!("\u{1F464} <b>Driver:</b> {driver_name}"),
        format!("\u{1F4C4} <b>Document:</b> {}", document.as_str()),
        format!("\u{1F4C5} <b>Expires:</b> {}", format_expiry(expiry)),
        format!("\u{23F0} <b>Remaining:</b> {days_until} days"),
    ];
    if urgent {
        lines.push(String::new());
        lines.push("\u{26A0}\u{FE0F} Immediate action required!".to_string());
    }
    lines.join("\n")
}

/// Truck regulatory document expiring.
pub fn truck_document_expiring(
    truck_number: &str,
    document: DocumentKind,
    expiry: DateTime<Utc>,
    days_until: i64,
) -> String {
    let severity = AlertSeverity::for_days_until(days_until);
    [
        format!("{} {} expiring", severity.emoji(), document.as_str()),
        format!("\u{1F69B} Truck: {truck_number}"),
        format!("\u{1F4C5} Expires: {}", format_expiry(expiry)),
        format!("\u{23F0} Remaining: {days_until} days"),
    ]
    .join("\n")
}

/// Maintenance due-soon / overdue alert.
pub fn maintenance_due(
    truck_number: &str,
    service_type: &str,
    current_mileage: i32,
    remaining_km: i32,
) -> String {
    let overdue = remaining_km <= 0;
    [
        format!(
            "{} Maintenance {}",
            if overdue {
                "\u{1F534} URGENT"
            } else {
                "\u{26A0}\u{FE0F}"
            },
            if overdue { "overdue" } else { "due soon" }
        ),
        format!("\u{1F69B} Truck: {truck_number}"),
        format!("\u{1F527} Type: {service_type}"),
        format!("\u{1F4CA} Current mileage: {current_mileage} km"),
        if overdue {
            format!("\u{26A0}\u{FE0F} Overdue by: {} km", remaining_km.abs())
        } else {
            format!("\u{23F0} Due in: {remaining_km} km")
        },
    ]
    .join("\n")
}

/// New load assigned to a driver/truck pair.
pub fn load_assigned(
    load_number: &str,
    driver_name: &str,
    truck_number: &str,
    pickup_city: &str,
    pickup_state: &str,
    delivery_city: &str,
    delivery_state: &str,
    scheduled_pickup: DateTime<Utc>,
) -> String {
    [
        "\u{1F69A} <b>New Load Assigned</b>".to_string(),
        String::new(),
        format!("\u{1F4CB} <b>Load:</b> {load_number}"),
        format!("\u{1F464} <b>Driver:</b> {driver_name}"),
        format!("\u{1F69B} <b>Truck:</b> {truck_number}"),
        String::new(),
        format!(
            "\u{1F4CD} <b>Route:</b>\n   {pickup_city}, {pickup_state} \u{2192} {delivery_city}, {delivery_state}"
        ),
        String::new(),
        format!(
            "\u{1F4C5} <b>Scheduled pickup:</b> {}",
            format_expiry(scheduled_pickup)
        ),
    ]
    .join("\n")
}
