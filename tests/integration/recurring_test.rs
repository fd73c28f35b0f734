//! End-to-end recurring load generation scenarios.

use std::sync::Arc;

use chrono::{NaiveDate, Timelike};

use fleetops_entity::load::frequency::RecurrenceFrequency;
use fleetops_entity::load::status::LoadStatus;
use fleetops_worker::RecurringLoadGenerator;

use crate::helpers::{template, InMemoryLoadStore, InMemoryTemplateStore};

fn monday() -> NaiveDate {
    // 2025-06-02 is a Monday.
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

fn generator(
    templates: Arc<InMemoryTemplateStore>,
    loads: Arc<InMemoryLoadStore>,
) -> RecurringLoadGenerator {
    RecurringLoadGenerator::new(templates, loads)
}

#[tokio::test]
async fn weekly_template_fires_on_its_monday() {
    let mut t = template(RecurrenceFrequency::Weekly);
    t.day_of_week = Some(1); // Monday
    let templates = Arc::new(InMemoryTemplateStore::with(vec![t.clone()]));
    let loads = Arc::new(InMemoryLoadStore::new());

    let outcome = generator(Arc::clone(&templates), Arc::clone(&loads))
        .generate_for_date(monday())
        .await
        .unwrap();

    assert_eq!(outcome.created, 1);
    assert_eq!(outcome.loads[0].load_number, "LOAD-2025-0001");

    let stored = loads.loads.lock().unwrap();
    let load = &stored[0];
    assert_eq!(load.scheduled_pickup_date.date_naive(), monday());
    assert_eq!(load.scheduled_pickup_date.hour(), 8);
    assert_eq!(load.scheduled_delivery_date.date_naive(), monday());
    assert_eq!(load.scheduled_delivery_date.hour(), 17);
    assert_eq!(load.status, LoadStatus::Available);
    assert_eq!(load.distance, 400.0);
    assert_eq!(load.load_rate, 1000.0);
    assert!(load.is_recurring);

    // The template got its audit stamp.
    assert_eq!(templates.generated_ids(), vec![t.id]);
}

#[tokio::test]
async fn no_matching_templates_creates_nothing() {
    let mut t = template(RecurrenceFrequency::Weekly);
    t.day_of_week = Some(1);
    let templates = Arc::new(InMemoryTemplateStore::with(vec![t]));
    let loads = Arc::new(InMemoryLoadStore::new());

    // 2025-06-03 is a Tuesday.
    let tuesday = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();
    let outcome = generator(Arc::clone(&templates), Arc::clone(&loads))
        .generate_for_date(tuesday)
        .await
        .unwrap();

    assert_eq!(outcome.created, 0);
    assert!(outcome.loads.is_empty());
    assert!(loads.load_numbers().is_empty());
    assert!(templates.generated_ids().is_empty());
}

#[tokio::test]
async fn batch_consumes_contiguous_sequence_numbers() {
    let batch = vec![
        template(RecurrenceFrequency::Daily),
        template(RecurrenceFrequency::Daily),
        template(RecurrenceFrequency::Daily),
    ];
    let templates = Arc::new(InMemoryTemplateStore::with(batch));
    let loads = Arc::new(InMemoryLoadStore::new());
    loads.seed("LOAD-2025-0007");

    let outcome = generator(Arc::clone(&templates), Arc::clone(&loads))
        .generate_for_date(monday())
        .await
        .unwrap();

    assert_eq!(outcome.created, 3);
    let numbers: Vec<_> = outcome.loads.iter().map(|l| l.load_number.clone()).collect();
    assert_eq!(numbers, ["LOAD-2025-0008", "LOAD-2025-0009", "LOAD-2025-0010"]);
}

#[tokio::test]
async fn sequence_starts_at_one_for_a_fresh_year() {
    let templates = Arc::new(InMemoryTemplateStore::with(vec![template(
        RecurrenceFrequency::Daily,
    )]));
    let loads = Arc::new(InMemoryLoadStore::new());
    // History from an earlier year does not leak into 2025.
    loads.seed("LOAD-2024-0099");

    let outcome = generator(templates, loads)
        .generate_for_date(monday())
        .await
        .unwrap();

    assert_eq!(outcome.loads[0].load_number, "LOAD-2025-0001");
}

#[tokio::test]
async fn full_default_assignment_creates_an_assigned_load() {
    let mut t = template(RecurrenceFrequency::Daily);
    t.driver_id = Some(uuid::Uuid::new_v4());
    t.truck_id = Some(uuid::Uuid::new_v4());
    let templates = Arc::new(InMemoryTemplateStore::with(vec![t]));
    let loads = Arc::new(InMemoryLoadStore::new());

    generator(templates, Arc::clone(&loads))
        .generate_for_date(monday())
        .await
        .unwrap();

    assert_eq!(loads.loads.lock().unwrap()[0].status, LoadStatus::Assigned);
}

#[tokio::test]
async fn same_day_rerun_creates_no_duplicates() {
    let templates = Arc::new(InMemoryTemplateStore::with(vec![template(
        RecurrenceFrequency::Daily,
    )]));
    let loads = Arc::new(InMemoryLoadStore::new());
    let generator = generator(templates, Arc::clone(&loads));

    let first = generator.generate_for_date(monday()).await.unwrap();
    let second = generator.generate_for_date(monday()).await.unwrap();

    assert_eq!(first.created, 1);
    assert_eq!(second.created, 0);
    assert_eq!(loads.load_numbers(), ["LOAD-2025-0001"]);
}

#[tokio::test]
async fn storage_failure_aborts_the_run_but_keeps_earlier_loads() {
    let batch = vec![
        template(RecurrenceFrequency::Daily),
        template(RecurrenceFrequency::Daily),
        template(RecurrenceFrequency::Daily),
    ];
    let first_id = batch[0].id;
    let templates = Arc::new(InMemoryTemplateStore::with(batch));
    let loads = Arc::new(InMemoryLoadStore::failing_on_create(2));

    let result = generator(Arc::clone(&templates), Arc::clone(&loads))
        .generate_for_date(monday())
        .await;

    assert!(result.is_err());
    // The first template's load is committed; the run stopped before
    // the third template was touched.
    assert_eq!(loads.load_numbers(), ["LOAD-2025-0001"]);
    assert_eq!(templates.generated_ids(), vec![first_id]);
}
