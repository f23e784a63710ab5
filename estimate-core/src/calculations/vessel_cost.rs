//! Vessel Cost Calculator: one vessel's materials/equipment/labor subtotal
//! ("direct cost"), gated by scope flags.
//!
//! Every branch is a total function: dimensions are clamped non-negative at
//! construction and an unresolvable equipment package degrades to zero, so
//! per-vessel costing cannot fail.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_half_up;
use crate::calculations::equipment::resolve_package_cost;
use crate::calculations::geometry::{VesselAreas, surface_areas};
use crate::models::{EquipmentPackage, RateConfiguration, ScopeFlags, Vessel, VesselType};

/// One vessel's derived areas and cost subtotals.
///
/// A pure function of Vessel + catalog + rates + scopes; recomputed from
/// scratch on every input change, never stored or mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VesselCostResult {
    pub vessel_id: String,
    pub vessel_name: String,
    pub vessel_type: VesselType,
    pub areas: VesselAreas,

    /// Finish materials: rate × finish area, per-vessel base, handrails.
    pub materials_subtotal: Decimal,
    /// Resolved equipment-package cost.
    pub equipment_subtotal: Decimal,
    /// Installation labor including conditional add-ons, scaled by the
    /// regional multiplier.
    pub labor_subtotal: Decimal,
    /// materials + equipment + labor.
    pub direct_cost: Decimal,
}

/// Calculator producing a vessel's direct cost.
///
/// Borrows the rate configuration, scope flags, and equipment catalog for a
/// single recomputation pass; the same calculator prices every vessel in the
/// project snapshot.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use estimate_core::calculations::vessel_cost::VesselCostCalculator;
/// use estimate_core::{
///     EquipmentPackage, LineItem, NonNegative, RateConfiguration, ScopeFlags, Vessel,
///     VesselType,
/// };
///
/// let rates = RateConfiguration {
///     materials_rate_per_sqft: NonNegative::new(dec!(6.00)),
///     labor_rate_per_sqft: NonNegative::new(dec!(40.00)),
///     ..RateConfiguration::default()
/// };
/// let scopes = ScopeFlags::all_enabled();
/// let catalog = vec![EquipmentPackage {
///     key: "plunge-basic".into(),
///     label: "Cold Plunge Basic".into(),
///     applies_to: vec![VesselType::ColdPlunge],
///     line_items: vec![
///         LineItem { label: "Chiller".into(), cost: NonNegative::new(dec!(4800.00)) },
///         LineItem { label: "Pump".into(), cost: NonNegative::new(dec!(650.00)) },
///     ],
/// }];
///
/// let vessel = Vessel {
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
/// let calculator = VesselCostCalculator::new(&rates, &scopes, &catalog);
/// let result = calculator.calculate(&vessel);
///
/// // 121 ft² of finish area at $6 materials / $40 labor, $5,450 of equipment.
/// assert_eq!(result.materials_subtotal, dec!(726.00));
/// assert_eq!(result.labor_subtotal, dec!(4840.00));
/// assert_eq!(result.equipment_subtotal, dec!(5450.00));
/// assert_eq!(result.direct_cost, dec!(11016.00));
/// ```
#[derive(Debug, Clone)]
pub struct VesselCostCalculator<'a> {
    rates: &'a RateConfiguration,
    scopes: &'a ScopeFlags,
    catalog: &'a [EquipmentPackage],
}

impl<'a> VesselCostCalculator<'a> {
    /// Creates a calculator over the given rates, scopes, and catalog.
    pub fn new(
        rates: &'a RateConfiguration,
        scopes: &'a ScopeFlags,
        catalog: &'a [EquipmentPackage],
    ) -> Self {
        Self {
            rates,
            scopes,
            catalog,
        }
    }

    /// Calculates one vessel's areas and direct cost.
    ///
    /// Each money line is rounded to cents half-up; the direct cost is the
    /// exact sum of the rounded subtotals.
    pub fn calculate(&self, vessel: &Vessel) -> VesselCostResult {
        let areas = surface_areas(vessel);

        let materials_subtotal = self.materials_subtotal(vessel, &areas);
        let equipment_subtotal = self.equipment_subtotal(vessel);
        let labor_subtotal = self.labor_subtotal(vessel, &areas);

        VesselCostResult {
            vessel_id: vessel.id.clone(),
            vessel_name: vessel.name.clone(),
            vessel_type: vessel.vessel_type,
            areas,
            materials_subtotal,
            equipment_subtotal,
            labor_subtotal,
            direct_cost: materials_subtotal + equipment_subtotal + labor_subtotal,
        }
    }

    /// Finish materials: rate × finish area, plus the per-vessel base and
    /// handrail hardware. Zero when the materials scope is disabled.
    fn materials_subtotal(&self, vessel: &Vessel, areas: &VesselAreas) -> Decimal {
        if !self.scopes.materials {
            return Decimal::ZERO;
        }

        let area_cost = self.rates.materials_rate_per_sqft.get() * areas.finish;
        let handrails =
            self.rates.handrail_cost_each.get() * Decimal::from(vessel.handrail_count);

        round_half_up(area_cost + self.rates.materials_base_per_vessel.get() + handrails)
    }

    /// Resolved equipment-package cost. Zero when the equipment scope is
    /// disabled or no applicable package exists.
    fn equipment_subtotal(&self, vessel: &Vessel) -> Decimal {
        if !self.scopes.equipment {
            return Decimal::ZERO;
        }

        round_half_up(resolve_package_cost(
            self.catalog,
            &vessel.equipment_package_key,
            vessel.vessel_type,
        ))
    }

    /// Installation labor: rate × finish area plus the per-vessel base and
    /// the type-conditional add-ons, all scaled by the regional multiplier.
    /// Zero when the labor scope is disabled.
    fn labor_subtotal(&self, vessel: &Vessel, areas: &VesselAreas) -> Decimal {
        if !self.scopes.labor {
            return Decimal::ZERO;
        }

        let area_cost = self.rates.labor_rate_per_sqft.get() * areas.finish;
        let base = self.rates.labor_base_per_vessel.get();
        let add_ons = self.refrigeration_add_on(vessel) + self.jet_add_on(vessel);

        round_half_up((area_cost + base + add_ons) * self.rates.regional_multiplier.get())
    }

    /// Flat refrigeration-line charge, applied only to a cold plunge with
    /// the refrigeration flag set.
    fn refrigeration_add_on(&self, vessel: &Vessel) -> Decimal {
        if vessel.vessel_type == VesselType::ColdPlunge && vessel.refrigeration_lines {
            self.rates.refrigeration_line_charge.get()
        } else {
            Decimal::ZERO
        }
    }

    /// Incremental charge for each hot-tub jet above the included baseline.
    fn jet_add_on(&self, vessel: &Vessel) -> Decimal {
        if vessel.vessel_type != VesselType::HotTub {
            return Decimal::ZERO;
        }

        let billable = vessel.jet_count.saturating_sub(self.rates.included_jet_count);
        self.rates.jet_charge_each.get() * Decimal::from(billable)
    }
}
