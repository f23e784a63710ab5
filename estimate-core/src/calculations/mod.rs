//! Cost computation pipeline for multi-vessel pool/spa projects.
//!
//! Data flows one way: the geometry calculator and equipment resolver feed
//! the per-vessel cost calculator; every vessel's result feeds the cost
//! allocation & markup engine, which produces the client-facing totals.

pub mod common;
pub mod equipment;
pub mod geometry;
pub mod project_cost;
pub mod vessel_cost;

pub use equipment::resolve_package_cost;
pub use geometry::{VesselAreas, surface_areas};
pub use project_cost::{
    CostAllocator, PooledCosts, ProjectCostError, ProjectCostResult, ProjectEstimate,
    VesselAllocation, compute_project_cost,
};
pub use vessel_cost::{VesselCostCalculator, VesselCostResult};
