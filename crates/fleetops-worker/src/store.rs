//! Storage ports for the batch jobs.
//!
//! The batch engine never touches a database handle directly: each job
//! receives `Arc<dyn …Store>` collaborators. The traits are defined
//! here, next to their consumers, and implemented for the concrete
//! repositories in `fleetops-database`; tests substitute in-memory
//! fakes.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use fleetops_core::result::AppResult;
use fleetops_database::repositories::{
    DriverRepository, LoadRepository, MaintenanceRepository, TemplateRepository, TruckRepository,
};
use fleetops_entity::driver::model::Driver;
use fleetops_entity::load::model::{Load, NewLoad};
use fleetops_entity::load::template::RecurringLoadTemplate;
use fleetops_entity::maintenance::model::MaintenanceRecord;
use fleetops_entity::truck::model::Truck;

/// Read/write access to recurring load templates.
#[async_trait]
pub trait TemplateStore: Send + Sync + std::fmt::Debug {
    /// List all active templates in storage-default order.
    async fn find_active(&self) -> AppResult<Vec<RecurringLoadTemplate>>;

    /// Stamp a template's last generation time (advisory audit trail).
    async fn mark_generated(&self, id: Uuid, at: DateTime<Utc>) -> AppResult<()>;
}

/// Read/write access to loads.
#[async_trait]
pub trait LoadStore: Send + Sync + std::fmt::Debug {
    /// Return the highest-sorted `LOAD-<year>-` load number, if any.
    async fn last_load_number_for_year(&self, year: i32) -> AppResult<Option<String>>;

    /// Check whether a recurring group already has a load picking up on
    /// the given calendar date.
    async fn exists_for_group_on(&self, group_id: Uuid, date: NaiveDate) -> AppResult<bool>;

    /// Create a load and return the stored row.
    async fn create(&self, load: &NewLoad) -> AppResult<Load>;
}

/// Read access to the driver roster.
#[async_trait]
pub trait DriverStore: Send + Sync + std::fmt::Debug {
    /// List every driver on the roster.
    async fn find_all(&self) -> AppResult<Vec<Driver>>;
}

/// Read access to the truck fleet.
#[async_trait]
pub trait TruckStore: Send + Sync + std::fmt::Debug {
    /// List all trucks in active service.
    async fn find_active(&self) -> AppResult<Vec<Truck>>;

    /// Find a truck by its primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Truck>>;
}

/// Read access to maintenance records.
#[async_trait]
pub trait MaintenanceStore: Send + Sync + std::fmt::Debug {
    /// List every record with a next-service odometer target set.
    async fn find_with_service_due(&self) -> AppResult<Vec<MaintenanceRecord>>;
}

#[async_trait]
impl TemplateStore for TemplateRepository {
    async fn find_active(&self) -> AppResult<Vec<RecurringLoadTemplate>> {
        TemplateRepository::find_active(self).await
    }

    async fn mark_generated(&self, id: Uuid, at: DateTime<Utc>) -> AppResult<()> {
        TemplateRepository::mark_generated(self, id, at).await
    }
}

#[async_trait]
impl LoadStore for LoadRepository {
    async fn last_load_number_for_year(&self, year: i32) -> AppResult<Option<String>> {
        LoadRepository::last_load_number_for_year(self, year).await
    }

    async fn exists_for_group_on(&self, group_id: Uuid, date: NaiveDate) -> AppResult<bool> {
        LoadRepository::exists_for_group_on(self, group_id, date).await
    }

    async fn create(&self, load: &NewLoad) -> AppResult<Load> {
        LoadRepository::create(self, load).await
    }
}

#[async_trait]
impl DriverStore for DriverRepository {
    async fn find_all(&self) -> AppResult<Vec<Driver>> {
        DriverRepository::find_all(self).await
    }
}

#[async_trait]
impl TruckStore for TruckRepository {
    async fn find_active(&self) -> AppResult<Vec<Truck>> {
        TruckRepository::find_active(self).await
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Truck>> {
        TruckRepository::find_by_id(self, id).await
    }
}

#[async_trait]
impl MaintenanceStore for MaintenanceRepository {
    async fn find_with_service_due(&self) -> AppResult<Vec<MaintenanceRecord>> {
        MaintenanceRepository::find_with_service_due(self).await
    }
}
