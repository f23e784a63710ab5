use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::NonNegative;

/// Project-wide cost rates and markup percentages.
///
/// A single immutable value object passed explicitly into every calculation
/// step; there is no ambient or global rate state. Percentage fields hold
/// plain numbers (`7.5` means 7.5%) and are divided by 100 at point of use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateConfiguration {
    // Materials
    /// Finish materials, dollars per square foot of finish area.
    pub materials_rate_per_sqft: NonNegative,
    /// Fixed materials add-on applied once per vessel.
    pub materials_base_per_vessel: NonNegative,
    /// Handrail hardware, dollars per rail.
    pub handrail_cost_each: NonNegative,

    // Labor
    /// Installation labor, dollars per square foot of finish area.
    pub labor_rate_per_sqft: NonNegative,
    /// Fixed labor charge applied once per vessel.
    pub labor_base_per_vessel: NonNegative,
    /// Flat charge for running refrigeration lines to a cold plunge.
    pub refrigeration_line_charge: NonNegative,
    /// Incremental charge per hot-tub jet above [`Self::included_jet_count`].
    pub jet_charge_each: NonNegative,
    /// Jets included in the base labor figure; only jets beyond this count
    /// are charged.
    pub included_jet_count: u32,
    /// Regional cost index applied to labor and freight.
    pub regional_multiplier: NonNegative,

    // Freight
    /// One-way delivery distance in miles.
    pub freight_distance_miles: NonNegative,
    /// Freight dollars per mile.
    pub freight_rate_per_mile: NonNegative,
    /// Terminal handling dollars per vessel shipped.
    pub freight_handling_per_vessel: NonNegative,

    // Project-wide pooled costs
    /// Design & engineering base fee.
    pub design_base_fee: NonNegative,
    /// Multiplier on the design base fee for project complexity.
    pub design_complexity_multiplier: NonNegative,
    /// Manufacturer's representative fee.
    pub rep_fee: NonNegative,
    /// Equipment startup and commissioning.
    pub startup_cost: NonNegative,
    /// Chemical storage provisioning.
    pub chemical_storage_cost: NonNegative,
    /// Crane/rigging to set vessels, dollars per vessel.
    pub rigging_per_vessel: NonNegative,

    // Percentages (plain numbers; 7.5 means 7.5%)
    /// Design-development contingency.
    pub contingency_pct: NonNegative,
    /// Material waste factor.
    pub waste_pct: NonNegative,
    /// Overhead & profit markup.
    pub overhead_profit_pct: NonNegative,
    /// Warranty reserve, as a percentage of the final client price
    /// (reverse-solved; must be below 100).
    pub warranty_pct: NonNegative,
}

impl Default for RateConfiguration {
    /// Neutral configuration: every rate, fee, and percentage is zero and
    /// every multiplier is one, so an unconfigured field contributes nothing
    /// without distorting the fields that are set.
    fn default() -> Self {
        let zero = NonNegative::ZERO;
        let one = NonNegative::new(Decimal::ONE);
        Self {
            materials_rate_per_sqft: zero,
            materials_base_per_vessel: zero,
            handrail_cost_each: zero,
            labor_rate_per_sqft: zero,
            labor_base_per_vessel: zero,
            refrigeration_line_charge: zero,
            jet_charge_each: zero,
            included_jet_count: 0,
            regional_multiplier: one,
            freight_distance_miles: zero,
            freight_rate_per_mile: zero,
            freight_handling_per_vessel: zero,
            design_base_fee: zero,
            design_complexity_multiplier: one,
            rep_fee: zero,
            startup_cost: zero,
            chemical_storage_cost: zero,
            rigging_per_vessel: zero,
            contingency_pct: zero,
            waste_pct: zero,
            overhead_profit_pct: zero,
            warranty_pct: zero,
        }
    }
}
