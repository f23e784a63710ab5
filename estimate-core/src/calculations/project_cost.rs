//! Cost Allocation & Markup Engine: pools project-wide costs, allocates them
//! across vessels in proportion to direct cost, then layers contingency,
//! waste, overhead & profit, and the reverse-solved warranty reserve to
//! arrive at the client price.
//!
//! Warranty is defined as a percentage of the *output* client price, not of
//! any cost base, so it is solved algebraically:
//! `clientTotal = preWarranty / (1 − warrantyPct)`. A warranty rate at or
//! above 100% makes that division meaningless and is the engine's only
//! genuine configuration error.
//!
//! Money lines are rounded to cents when pooled; allocation-stage values are
//! kept at full decimal precision so the conservation invariants (the
//! allocated bases sum to direct + pooled, the contingency slices sum to the
//! contingency total) hold to decimal precision. Presentation rounding
//! belongs to the report consumers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::{percent, round_half_up};
use crate::calculations::vessel_cost::{VesselCostCalculator, VesselCostResult};
use crate::models::{EquipmentPackage, RateConfiguration, ScopeFlags, Vessel};

/// Errors that can occur during project cost allocation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectCostError {
    /// The warranty reserve is a fraction of the final client price; at 100%
    /// or more the reverse solve `preWarranty / (1 − pct)` has no finite
    /// solution.
    #[error("warranty percentage must be less than 100%, got {0}")]
    WarrantyRateTooHigh(Decimal),
}

/// Project-wide costs not attributable to any single vessel until allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PooledCosts {
    /// `(miles × $/mile + vessels × handling) × regional multiplier`.
    pub freight: Decimal,
    /// Design & engineering: base fee × complexity multiplier.
    pub design_engineering: Decimal,
    pub rep_fee: Decimal,
    pub startup: Decimal,
    pub chemical_storage: Decimal,
    /// Crane/rigging: per-vessel rate × vessel count.
    pub rigging: Decimal,
}

impl PooledCosts {
    /// Sum of every pooled bucket.
    pub fn total(&self) -> Decimal {
        self.freight
            + self.design_engineering
            + self.rep_fee
            + self.startup
            + self.chemical_storage
            + self.rigging
    }
}

/// One vessel's row in the project allocation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VesselAllocation {
    pub vessel_id: String,
    /// The vessel's materials + equipment + labor subtotal.
    pub direct_cost: Decimal,
    /// Direct cost plus this vessel's proportional slice of the pooled costs.
    pub pre_contingency_base: Decimal,
    pub contingency: Decimal,
    pub waste: Decimal,
    pub overhead_profit: Decimal,
    /// Reserve satisfying `warranty = client_total × warrantyPct`.
    pub warranty: Decimal,
    pub client_total: Decimal,
}

/// Per-vessel allocation table plus project-level rollups.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectCostResult {
    pub allocations: Vec<VesselAllocation>,
    pub pooled: PooledCosts,

    /// Sum of every vessel's direct cost.
    pub direct_cost_total: Decimal,
    /// Sum of every vessel's finish area, in square feet.
    pub finish_area_total: Decimal,
    /// Client-facing project price: the sum of every vessel's client total.
    pub client_price: Decimal,
    /// Sum of the overhead & profit layer across vessels.
    pub overhead_profit_total: Decimal,
    /// `overhead_profit_total / client_price × 100`, zero for a zero price.
    pub gross_margin_pct: Decimal,
    /// `client_price / finish_area_total`, zero for zero area.
    pub effective_cost_per_sqft: Decimal,
}

/// The terminal stage of the pipeline: turns the full vessel cost list into
/// the client-facing allocation table and rollup.
#[derive(Debug, Clone)]
pub struct CostAllocator<'a> {
    rates: &'a RateConfiguration,
    scopes: &'a ScopeFlags,
}

impl<'a> CostAllocator<'a> {
    /// Creates an allocator over the given rates and scope flags.
    pub fn new(rates: &'a RateConfiguration, scopes: &'a ScopeFlags) -> Self {
        Self { rates, scopes }
    }

    /// Allocates pooled costs across the given vessel results and layers the
    /// markups, producing the project cost result.
    ///
    /// An empty vessel list yields an all-zero result rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectCostError::WarrantyRateTooHigh`] when the warranty
    /// scope is enabled and the configured warranty percentage is 100 or
    /// more.
    pub fn allocate(
        &self,
        vessel_costs: &[VesselCostResult],
    ) -> Result<ProjectCostResult, ProjectCostError> {
        self.validate()?;

        if vessel_costs.is_empty() {
            return Ok(ProjectCostResult::default());
        }

        let pooled = self.pooled_costs(vessel_costs.len());
        let pooled_total = pooled.total();

        // Proportional allocation over direct-cost shares. The share
        // denominator is guarded to one so an all-zero direct base divides
        // cleanly instead of panicking.
        let direct_cost_total: Decimal = vessel_costs.iter().map(|v| v.direct_cost).sum();
        let share_base = if direct_cost_total.is_zero() {
            Decimal::ONE
        } else {
            direct_cost_total
        };
        if direct_cost_total.is_zero() && !pooled_total.is_zero() {
            warn!(
                %pooled_total,
                "zero direct-cost base; pooled costs cannot be allocated to vessels"
            );
        }

        let pre_bases: Vec<Decimal> = vessel_costs
            .iter()
            .map(|v| v.direct_cost + v.direct_cost / share_base * pooled_total)
            .collect();
        let pre_base_total: Decimal = pre_bases.iter().copied().sum();

        // The contingency pot is computed on the allocated bases and
        // redistributed by freshly computed shares of those bases, not the
        // direct-cost shares used above.
        let contingency_total = if self.scopes.design_contingency {
            pre_base_total * percent(self.rates.contingency_pct.get())
        } else {
            Decimal::ZERO
        };

        let waste_rate = percent(self.rates.waste_pct.get());
        let ohp_rate = percent(self.rates.overhead_profit_pct.get());
        let warranty_divisor = if self.scopes.warranty {
            Decimal::ONE - percent(self.rates.warranty_pct.get())
        } else {
            Decimal::ONE
        };

        let mut allocations = Vec::with_capacity(vessel_costs.len());
        for (cost, &pre_base) in vessel_costs.iter().zip(&pre_bases) {
            let contingency = if pre_base_total.is_zero() {
                Decimal::ZERO
            } else {
                pre_base / pre_base_total * contingency_total
            };
            let base_plus_cont = pre_base + contingency;

            // Waste and OH&P are forward percentages of the
            // contingency-adjusted base; warranty is reverse-solved from the
            // client total.
            let waste = base_plus_cont * waste_rate;
            let overhead_profit = base_plus_cont * ohp_rate;
            let pre_warranty = base_plus_cont + waste + overhead_profit;
            let client_total = pre_warranty / warranty_divisor;
            let warranty = client_total - pre_warranty;

            allocations.push(VesselAllocation {
                vessel_id: cost.vessel_id.clone(),
                direct_cost: cost.direct_cost,
                pre_contingency_base: pre_base,
                contingency,
                waste,
                overhead_profit,
                warranty,
                client_total,
            });
        }

        // Rollup.
        let client_price: Decimal = allocations.iter().map(|a| a.client_total).sum();
        let overhead_profit_total: Decimal = allocations.iter().map(|a| a.overhead_profit).sum();
        let finish_area_total: Decimal = vessel_costs.iter().map(|v| v.areas.finish).sum();
        let gross_margin_pct = if client_price.is_zero() {
            Decimal::ZERO
        } else {
            overhead_profit_total / client_price * Decimal::ONE_HUNDRED
        };
        let effective_cost_per_sqft = if finish_area_total.is_zero() {
            Decimal::ZERO
        } else {
            client_price / finish_area_total
        };

        Ok(ProjectCostResult {
            allocations,
            pooled,
            direct_cost_total,
            finish_area_total,
            client_price,
            overhead_profit_total,
            gross_margin_pct,
            effective_cost_per_sqft,
        })
    }

    /// Rejects a warranty rate the reverse solve cannot handle. Only checked
    /// when the warranty scope is enabled; a disabled scope never divides by
    /// the rate, so a stale value cannot poison the snapshot.
    fn validate(&self) -> Result<(), ProjectCostError> {
        let pct = self.rates.warranty_pct.get();
        if self.scopes.warranty && pct >= Decimal::ONE_HUNDRED {
            return Err(ProjectCostError::WarrantyRateTooHigh(pct));
        }
        Ok(())
    }

    /// Pools project-wide costs, each bucket gated by its scope flag.
    /// Rigging rides the freight flag; the rep fee, startup, and chemical
    /// storage ride the equipment flag.
    fn pooled_costs(&self, vessel_count: usize) -> PooledCosts {
        let n = Decimal::from(vessel_count);
        let r = self.rates;

        let freight = if self.scopes.freight {
            round_half_up(
                (r.freight_distance_miles.get() * r.freight_rate_per_mile.get()
                    + n * r.freight_handling_per_vessel.get())
                    * r.regional_multiplier.get(),
            )
        } else {
            Decimal::ZERO
        };
        let rigging = if self.scopes.freight {
            round_half_up(r.rigging_per_vessel.get() * n)
        } else {
            Decimal::ZERO
        };

        let design_engineering = if self.scopes.design_engineering {
            round_half_up(r.design_base_fee.get() * r.design_complexity_multiplier.get())
        } else {
            Decimal::ZERO
        };

        let (rep_fee, startup, chemical_storage) = if self.scopes.equipment {
            (
                round_half_up(r.rep_fee.get()),
                round_half_up(r.startup_cost.get()),
                round_half_up(r.chemical_storage_cost.get()),
            )
        } else {
            (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
        };

        PooledCosts {
            freight,
            design_engineering,
            rep_fee,
            startup,
            chemical_storage,
            rigging,
        }
    }
}

/// Per-vessel and project estimate for one input snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEstimate {
    pub vessel_costs: Vec<VesselCostResult>,
    pub project: ProjectCostResult,
}

/// Computes the full project estimate from an input snapshot.
///
/// This is the engine's boundary: a pure, synchronous function of the vessel
/// list, equipment catalog, rate configuration, and scope flags. Identical
/// inputs always produce identical outputs; callers re-invoke it whole on
/// every input change.
///
/// # Errors
///
/// Returns [`ProjectCostError::WarrantyRateTooHigh`] when the warranty scope
/// is enabled with a warranty percentage of 100 or more. Every other edge
/// case degrades to zeroed or clamped values.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use estimate_core::{
///     EquipmentPackage, LineItem, NonNegative, RateConfiguration, ScopeFlags, Vessel,
///     VesselType, compute_project_cost,
/// };
///
/// let vessels = vec![Vessel {
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
/// }];
/// let catalog = vec![EquipmentPackage {
///     key: "plunge-basic".into(),
///     label: "Cold Plunge Basic".into(),
///     applies_to: vec![VesselType::ColdPlunge],
///     line_items: vec![
///         LineItem { label: "Chiller".into(), cost: NonNegative::new(dec!(4800.00)) },
///         LineItem { label: "Pump".into(), cost: NonNegative::new(dec!(650.00)) },
///     ],
/// }];
/// let rates = RateConfiguration {
///     materials_rate_per_sqft: NonNegative::new(dec!(6.00)),
///     labor_rate_per_sqft: NonNegative::new(dec!(40.00)),
///     ..RateConfiguration::default()
/// };
///
/// let estimate =
///     compute_project_cost(&vessels, &catalog, &rates, &ScopeFlags::all_enabled()).unwrap();
///
/// // 121 ft²: 726 materials + 4,840 labor + 5,450 equipment, no markups.
/// assert_eq!(estimate.project.client_price, dec!(11016.00));
/// ```
pub fn compute_project_cost(
    vessels: &[Vessel],
    catalog: &[EquipmentPackage],
    rates: &RateConfiguration,
    scopes: &ScopeFlags,
) -> Result<ProjectEstimate, ProjectCostError> {
    let calculator = VesselCostCalculator::new(rates, scopes, catalog);
    let vessel_costs: Vec<VesselCostResult> =
        vessels.iter().map(|v| calculator.calculate(v)).collect();
    let project = CostAllocator::new(rates, scopes).allocate(&vessel_costs)?;

    Ok(ProjectEstimate {
        vessel_costs,
        project,
    })
}
