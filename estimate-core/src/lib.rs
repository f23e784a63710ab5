pub mod calculations;
pub mod models;

pub use calculations::{
    CostAllocator, PooledCosts, ProjectCostError, ProjectCostResult, ProjectEstimate,
    VesselAllocation, VesselAreas, VesselCostCalculator, VesselCostResult, compute_project_cost,
};
pub use models::*;
