//! Shared in-memory fakes and entity builders for integration tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use fleetops_core::error::AppError;
use fleetops_core::result::AppResult;
use fleetops_entity::driver::model::Driver;
use fleetops_entity::load::frequency::RecurrenceFrequency;
use fleetops_entity::load::model::{Load, NewLoad};
use fleetops_entity::load::template::RecurringLoadTemplate;
use fleetops_entity::maintenance::model::MaintenanceRecord;
use fleetops_entity::truck::model::Truck;
use fleetops_notify::dispatcher::{MessageDispatcher, MessageFormat};
use fleetops_worker::store::{DriverStore, LoadStore, MaintenanceStore, TemplateStore, TruckStore};

// ── Entity builders ──────────────────────────────────────────────

/// A minimal active template for the given frequency.
pub fn template(frequency: RecurrenceFrequency) -> RecurringLoadTemplate {
    RecurringLoadTemplate {
        id: Uuid::new_v4(),
        frequency,
        day_of_week: None,
        day_of_month: None,
        is_active: true,
        pickup_address: "100 Dock Rd".into(),
        pickup_city: "Chicago".into(),
        pickup_state: "IL".into(),
        pickup_zip: "60601".into(),
        pickup_contact_name: None,
        pickup_contact_phone: None,
        delivery_address: "200 Ramp Ave".into(),
        delivery_city: "Detroit".into(),
        delivery_state: "MI".into(),
        delivery_zip: "48201".into(),
        delivery_contact_name: None,
        delivery_contact_phone: None,
        distance: 400.0,
        deadhead_distance: 25.0,
        load_rate: 1000.0,
        custom_rate_per_distance: None,
        detention_time: None,
        detention_pay: None,
        notes: None,
        special_instructions: None,
        driver_id: None,
        truck_id: None,
        recurring_group_id: Uuid::new_v4(),
        last_generated_at: None,
        created_at: DateTime::<Utc>::UNIX_EPOCH,
        updated_at: DateTime::<Utc>::UNIX_EPOCH,
    }
}

pub fn driver(first: &str, last: &str) -> Driver {
    Driver {
        id: Uuid::new_v4(),
        first_name: first.into(),
        last_name: last.into(),
        cdl_expiry: None,
        medical_card_expiry: None,
    }
}

pub fn truck(number: &str) -> Truck {
    Truck {
        id: Uuid::new_v4(),
        truck_number: number.into(),
        registration_expiry: None,
        insurance_expiry: None,
        current_mileage: None,
        is_active: true,
    }
}

pub fn maintenance_record(truck_id: Uuid, next_due: Option<i32>) -> MaintenanceRecord {
    MaintenanceRecord {
        id: Uuid::new_v4(),
        truck_id,
        service_type: "Oil change".into(),
        next_service_due: next_due,
        notes: None,
        created_at: DateTime::<Utc>::UNIX_EPOCH,
    }
}

// ── Store fakes ──────────────────────────────────────────────────

/// Template store over a plain vector, recording `mark_generated` calls.
#[derive(Debug, Default)]
pub struct InMemoryTemplateStore {
    templates: Mutex<Vec<RecurringLoadTemplate>>,
    pub generated: Mutex<Vec<Uuid>>,
}

impl InMemoryTemplateStore {
    pub fn with(templates: Vec<RecurringLoadTemplate>) -> Self {
        Self {
            templates: Mutex::new(templates),
            generated: Mutex::new(Vec::new()),
        }
    }

    pub fn generated_ids(&self) -> Vec<Uuid> {
        self.generated.lock().unwrap().clone()
    }
}

#[async_trait]
impl TemplateStore for InMemoryTemplateStore {
    async fn find_active(&self) -> AppResult<Vec<RecurringLoadTemplate>> {
        Ok(self
            .templates
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.is_active)
            .cloned()
            .collect())
    }

    async fn mark_generated(&self, id: Uuid, at: DateTime<Utc>) -> AppResult<()> {
        let mut templates = self.templates.lock().unwrap();
        if let Some(t) = templates.iter_mut().find(|t| t.id == id) {
            t.last_generated_at = Some(at);
        }
        self.generated.lock().unwrap().push(id);
        Ok(())
    }
}

/// Load store over a plain vector, optionally failing the Nth create.
#[derive(Debug, Default)]
pub struct InMemoryLoadStore {
    pub loads: Mutex<Vec<Load>>,
    fail_on_create: Option<usize>,
    creates: Mutex<usize>,
}

impl InMemoryLoadStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the `n`-th create call (1-based) with a database error.
    pub fn failing_on_create(n: usize) -> Self {
        Self {
            fail_on_create: Some(n),
            ..Self::default()
        }
    }

    /// Seed an existing load so the year's sequence has history.
    pub fn seed(&self, load_number: &str) {
        let new_load = NewLoad {
            load_number: load_number.into(),
            pickup_address: "1 First St".into(),
            pickup_city: "Gary".into(),
            pickup_state: "IN".into(),
            pickup_zip: "46402".into(),
            pickup_contact_name: None,
            pickup_contact_phone: None,
            scheduled_pickup_date: DateTime::<Utc>::UNIX_EPOCH,
            delivery_address: "2 Second St".into(),
            delivery_city: "Toledo".into(),
            delivery_state: "OH".into(),
            delivery_zip: "43604".into(),
            delivery_contact_name: None,
            delivery_contact_phone: None,
            scheduled_delivery_date: DateTime::<Utc>::UNIX_EPOCH,
            distance: 100.0,
            deadhead_distance: 0.0,
            load_rate: 300.0,
            custom_rate_per_distance: None,
            detention_time: None,
            detention_pay: None,
            notes: None,
            special_instructions: None,
            driver_id: None,
            truck_id: None,
            status: fleetops_entity::load::status::LoadStatus::Available,
            is_recurring: false,
            recurring_group_id: None,
        };
        self.loads.lock().unwrap().push(store_row(&new_load));
    }

    pub fn load_numbers(&self) -> Vec<String> {
        self.loads
            .lock()
            .unwrap()
            .iter()
            .map(|l| l.load_number.clone())
            .collect()
    }
}

fn store_row(new_load: &NewLoad) -> Load {
    let now = Utc::now();
    Load {
        id: Uuid::new_v4(),
        load_number: new_load.load_number.clone(),
        pickup_address: new_load.pickup_address.clone(),
        pickup_city: new_load.pickup_city.clone(),
        pickup_state: new_load.pickup_state.clone(),
        pickup_zip: new_load.pickup_zip.clone(),
        pickup_contact_name: new_load.pickup_contact_name.clone(),
        pickup_contact_phone: new_load.pickup_contact_phone.clone(),
        scheduled_pickup_date: new_load.scheduled_pickup_date,
        delivery_address: new_load.delivery_address.clone(),
        delivery_city: new_load.delivery_city.clone(),
        delivery_state: new_load.delivery_state.clone(),
        delivery_zip: new_load.delivery_zip.clone(),
        delivery_contact_name: new_load.delivery_contact_name.clone(),
        delivery_contact_phone: new_load.delivery_contact_phone.clone(),
        scheduled_delivery_date: new_load.scheduled_delivery_date,
        distance: new_load.distance,
        deadhead_distance: new_load.deadhead_distance,
        load_rate: new_load.load_rate,
        custom_rate_per_distance: new_load.custom_rate_per_distance,
        detention_time: new_load.detention_time,
        detention_pay: new_load.detention_pay,
        notes: new_load.notes.clone(),
        special_instructions: new_load.special_instructions.clone(),
        driver_id: new_load.driver_id,
        truck_id: new_load.truck_id,
        status: new_load.status,
        is_recurring: new_load.is_recurring,
        recurring_group_id: new_load.recurring_group_id,
        created_at: now,
        updated_at: now,
    }
}

#[async_trait]
impl LoadStore for InMemoryLoadStore {
    async fn last_load_number_for_year(&self, year: i32) -> AppResult<Option<String>> {
        let prefix = format!("LOAD-{year}-");
        Ok(self
            .loads
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.load_number.starts_with(&prefix))
            .map(|l| l.load_number.clone())
            .max())
    }

    async fn exists_for_group_on(&self, group_id: Uuid, date: NaiveDate) -> AppResult<bool> {
        Ok(self.loads.lock().unwrap().iter().any(|l| {
            l.recurring_group_id == Some(group_id)
                && l.scheduled_pickup_date.date_naive() == date
        }))
    }

    async fn create(&self, load: &NewLoad) -> AppResult<Load> {
        let mut creates = self.creates.lock().unwrap();
        *creates += 1;
        if self.fail_on_create == Some(*creates) {
            return Err(AppError::database("simulated insert failure"));
        }

        let row = store_row(load);
        self.loads.lock().unwrap().push(row.clone());
        Ok(row)
    }
}

/// Driver store over a plain vector.
#[derive(Debug, Default)]
pub struct InMemoryDriverStore {
    drivers: Vec<Driver>,
}

impl InMemoryDriverStore {
    pub fn with(drivers: Vec<Driver>) -> Self {
        Self { drivers }
    }
}

#[async_trait]
impl DriverStore for InMemoryDriverStore {
    async fn find_all(&self) -> AppResult<Vec<Driver>> {
        Ok(self.drivers.clone())
    }
}

/// Driver store that always fails, for scan-failure scenarios.
#[derive(Debug)]
pub struct FailingDriverStore;

#[async_trait]
impl DriverStore for FailingDriverStore {
    async fn find_all(&self) -> AppResult<Vec<Driver>> {
        Err(AppError::database("simulated driver read failure"))
    }
}

/// Truck store over a plain vector.
#[derive(Debug, Default)]
pub struct InMemoryTruckStore {
    trucks: Vec<Truck>,
}

impl InMemoryTruckStore {
    pub fn with(trucks: Vec<Truck>) -> Self {
        Self { trucks }
    }
}

#[async_trait]
impl TruckStore for InMemoryTruckStore {
    async fn find_active(&self) -> AppResult<Vec<Truck>> {
        Ok(self.trucks.iter().filter(|t| t.is_active).cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Truck>> {
        Ok(self.trucks.iter().find(|t| t.id == id).cloned())
    }
}

/// Maintenance store over a plain vector.
#[derive(Debug, Default)]
pub struct InMemoryMaintenanceStore {
    records: Vec<MaintenanceRecord>,
}

impl InMemoryMaintenanceStore {
    pub fn with(records: Vec<MaintenanceRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl MaintenanceStore for InMemoryMaintenanceStore {
    async fn find_with_service_due(&self) -> AppResult<Vec<MaintenanceRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.next_service_due.is_some())
            .cloned()
            .collect())
    }
}

// ── Dispatcher fake ──────────────────────────────────────────────

/// Records every admin message; optionally rejects texts containing a
/// marker substring to simulate per-message delivery failures.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    pub sent: Mutex<Vec<String>>,
    fail_containing: Option<String>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(marker: &str) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_containing: Some(marker.into()),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageDispatcher for RecordingDispatcher {
    async fn send(&self, _target: &str, text: &str, format: MessageFormat) -> AppResult<()> {
        self.send_to_admin(text, format).await
    }

    async fn send_to_admin(&self, text: &str, _format: MessageFormat) -> AppResult<()> {
        if let Some(marker) = &self.fail_containing {
            if text.contains(marker.as_str()) {
                return Err(AppError::external_service("simulated dispatch failure"));
            }
        }
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
