//! Repository implementations for all FleetOps entities.

pub mod driver;
pub mod load;
pub mod maintenance;
pub mod template;
pub mod truck;

pub use driver::DriverRepository;
pub use load::LoadRepository;
pub use maintenance::MaintenanceRepository;
pub use template::TemplateRepository;
pub use truck::TruckRepository;
