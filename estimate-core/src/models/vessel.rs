use serde::{Deserialize, Serialize};

use crate::models::NonNegative;

/// The kind of vessel being built.
///
/// The type drives equipment-package applicability and the conditional labor
/// add-ons (refrigeration lines for cold plunges, jets for hot tubs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VesselType {
    ColdPlunge,
    HotTub,
}

/// An optional bench sub-feature, a rectangle of finished surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchSpec {
    pub length_ft: NonNegative,
    pub width_ft: NonNegative,
}

/// An optional entry-steps sub-feature, a rectangle of finished surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSpec {
    pub length_ft: NonNegative,
    pub width_ft: NonNegative,
}

/// One physical pool/spa unit to be built.
///
/// Vessels are created and edited by the (out-of-scope) form UI and are
/// read-only input to the engine; no calculation mutates them. All linear
/// dimensions are interior feet, clamped non-negative at construction via
/// [`NonNegative`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vessel {
    pub id: String,
    pub vessel_type: VesselType,
    pub name: String,

    pub length_ft: NonNegative,
    pub width_ft: NonNegative,
    pub water_depth_ft: NonNegative,
    /// Overall wall height. Carried for structural/visualization consumers;
    /// the finish-area formula uses water depth only.
    pub wall_height_ft: NonNegative,

    pub bench: Option<BenchSpec>,
    pub steps: Option<StepSpec>,

    pub handrail_count: u32,
    /// Meaningful only for [`VesselType::ColdPlunge`].
    pub refrigeration_lines: bool,
    /// Meaningful only for [`VesselType::HotTub`].
    pub jet_count: u32,

    /// Key into the equipment-package catalog.
    pub equipment_package_key: String,
}
