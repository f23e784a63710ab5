//! Geometry Calculator: finished surface areas from a vessel's linear
//! dimensions.
//!
//! These are pure geometric formulas existing solely to drive dollars-per-
//! square-foot rates; they are not structural or rendering calculations.
//! All inputs are clamped non-negative at construction, so every function
//! here is total.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Vessel;

/// Finished surface areas of one vessel, in square feet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VesselAreas {
    /// `length × width`.
    pub floor: Decimal,
    /// Interior wall surface to the waterline: `2 × (length + width) × depth`.
    pub wall: Decimal,
    /// Bench sub-rectangle, zero when the vessel has no bench.
    pub bench: Decimal,
    /// Step sub-rectangle, zero when the vessel has no steps.
    pub step: Decimal,
    /// Total finish area: floor + wall + bench + step.
    pub finish: Decimal,
}

/// Computes the finished surface areas of a vessel.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use estimate_core::calculations::geometry::surface_areas;
/// use estimate_core::{NonNegative, Vessel, VesselType};
///
/// let plunge = Vessel {
///     id: "cp-1".into(),
///     vessel_type: VesselType::ColdPlunge,
///     name: "Cold Plunge".into(),
///     length_ft: NonNegative::new(dec!(10)),
///     width_ft: NonNegative::new(dec!(3)),
///     water_depth_ft: NonNegative::new(dec!(3.5)),
///     wall_height_ft: NonNegative::new(dec!(4)),
///     bench: None,
///     steps: None,
///     handrail_count: 0,
///     refrigeration_lines: false,
///     jet_count: 0,
///     equipment_package_key: "plunge-basic".into(),
/// };
///
/// let areas = surface_areas(&plunge);
///
/// assert_eq!(areas.floor, dec!(30));
/// assert_eq!(areas.wall, dec!(91.0));
/// assert_eq!(areas.finish, dec!(121.0));
/// ```
pub fn surface_areas(vessel: &Vessel) -> VesselAreas {
    let length = vessel.length_ft.get();
    let width = vessel.width_ft.get();
    let depth = vessel.water_depth_ft.get();

    let floor = length * width;
    let wall = Decimal::TWO * (length + width) * depth;
    let bench = vessel
        .bench
        .map(|b| b.length_ft.get() * b.width_ft.get())
        .unwrap_or(Decimal::ZERO);
    let step = vessel
        .steps
        .map(|s| s.length_ft.get() * s.width_ft.get())
        .unwrap_or(Decimal::ZERO);

    VesselAreas {
        floor,
        wall,
        bench,
        step,
        finish: floor + wall + bench + step,
    }
}
