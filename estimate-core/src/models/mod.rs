mod equipment;
mod non_negative;
mod rate_config;
mod scope_flags;
mod vessel;

pub use equipment::{EquipmentPackage, LineItem};
pub use non_negative::NonNegative;
pub use rate_config::RateConfiguration;
pub use scope_flags::ScopeFlags;
pub use vessel::{BenchSpec, StepSpec, Vessel, VesselType};
