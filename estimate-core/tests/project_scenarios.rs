//! End-to-end scenarios for the project cost pipeline: a realistic
//! two-vessel project plus the engine's edge and property checks.

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use estimate_core::{
    EquipmentPackage, LineItem, NonNegative, ProjectCostError, RateConfiguration, ScopeFlags,
    Vessel, VesselType, compute_project_cost,
};

fn catalog() -> Vec<EquipmentPackage> {
    vec![
        EquipmentPackage {
            key: "plunge-basic".into(),
            label: "Cold Plunge Basic".into(),
            applies_to: vec![VesselType::ColdPlunge],
            line_items: vec![
                LineItem {
                    label: "Chiller".into(),
                    cost: NonNegative::new(dec!(4800.00)),
                },
                LineItem {
                    label: "Pump".into(),
                    cost: NonNegative::new(dec!(650.00)),
                },
                LineItem {
                    label: "Filter".into(),
                    cost: NonNegative::new(dec!(420.00)),
                },
            ],
        },
        EquipmentPackage {
            key: "tub-basic".into(),
            label: "Hot Tub Basic".into(),
            applies_to: vec![VesselType::HotTub],
            line_items: vec![
                LineItem {
                    label: "Heater".into(),
                    cost: NonNegative::new(dec!(1500.00)),
                },
                LineItem {
                    label: "Pump".into(),
                    cost: NonNegative::new(dec!(650.00)),
                },
                LineItem {
                    label: "Controller".into(),
                    cost: NonNegative::new(dec!(900.00)),
                },
            ],
        },
    ]
}

fn rates() -> RateConfiguration {
    RateConfiguration {
        materials_rate_per_sqft: NonNegative::new(dec!(6.00)),
        labor_rate_per_sqft: NonNegative::new(dec!(40.00)),
        jet_charge_each: NonNegative::new(dec!(150.00)),
        included_jet_count: 6,
        freight_distance_miles: NonNegative::new(dec!(240)),
        freight_rate_per_mile: NonNegative::new(dec!(4.25)),
        freight_handling_per_vessel: NonNegative::new(dec!(350.00)),
        design_base_fee: NonNegative::new(dec!(3500.00)),
        design_complexity_multiplier: NonNegative::new(dec!(1.15)),
        rep_fee: NonNegative::new(dec!(1200.00)),
        startup_cost: NonNegative::new(dec!(850.00)),
        chemical_storage_cost: NonNegative::new(dec!(400.00)),
        rigging_per_vessel: NonNegative::new(dec!(750.00)),
        contingency_pct: NonNegative::new(dec!(7.5)),
        waste_pct: NonNegative::new(dec!(7.5)),
        overhead_profit_pct: NonNegative::new(dec!(12)),
        warranty_pct: NonNegative::new(dec!(1.5)),
        ..RateConfiguration::default()
    }
}

fn vessels() -> Vec<Vessel> {
    vec![
        Vessel {
            id: "cp-1".into(),
            vessel_type: VesselType::ColdPlunge,
            name: "Cold Plunge".into(),
            length_ft: NonNegative::new(dec!(10)),
            width_ft: NonNegative::new(dec!(3)),
            water_depth_ft: NonNegative::new(dec!(3.5)),
            wall_height_ft: NonNegative::new(dec!(4)),
            bench: None,
            steps: None,
            handrail_count: 0,
            refrigeration_lines: false,
            jet_count: 0,
            equipment_package_key: "plunge-basic".into(),
        },
        Vessel {
            id: "ht-1".into(),
            vessel_type: VesselType::HotTub,
            name: "Hot Tub".into(),
            length_ft: NonNegative::new(dec!(17.75)),
            width_ft: NonNegative::new(dec!(5.58)),
            water_depth_ft: NonNegative::new(dec!(3.5)),
            wall_height_ft: NonNegative::new(dec!(4)),
            bench: None,
            steps: None,
            handrail_count: 0,
            refrigeration_lines: false,
            jet_count: 8,
            equipment_package_key: "tub-basic".into(),
        },
    ]
}

fn assert_close(actual: Decimal, expected: Decimal, context: &str) {
    assert!(
        (actual - expected).abs() < dec!(0.000001),
        "{context}: {actual} vs {expected}"
    );
}

// =============================================================================
// two-vessel scenario
// =============================================================================

#[test]
fn two_vessel_scenario_finish_areas() {
    let estimate =
        compute_project_cost(&vessels(), &catalog(), &rates(), &ScopeFlags::all_enabled())
            .unwrap();

    // Cold plunge: 30 ft² floor + 2 × 13 × 3.5 = 91 ft² of wall.
    assert_eq!(estimate.vessel_costs[0].areas.finish, dec!(121.0));
    // Hot tub: 17.75 × 5.58 floor + 2 × 23.33 × 3.5 wall.
    assert_eq!(estimate.vessel_costs[1].areas.floor, dec!(99.0450));
    assert_eq!(estimate.vessel_costs[1].areas.wall, dec!(163.310));
    assert_eq!(estimate.vessel_costs[1].areas.finish, dec!(262.3550));
}

#[test]
fn two_vessel_scenario_client_price_is_sum_of_client_totals() {
    let estimate =
        compute_project_cost(&vessels(), &catalog(), &rates(), &ScopeFlags::all_enabled())
            .unwrap();

    let summed: Decimal = estimate
        .project
        .allocations
        .iter()
        .map(|a| a.client_total)
        .sum();
    assert_eq!(estimate.project.client_price, summed);
    assert!(estimate.project.client_price > Decimal::ZERO);
}

#[test]
fn two_vessel_scenario_warranty_ratio_is_exactly_the_rate() {
    let estimate =
        compute_project_cost(&vessels(), &catalog(), &rates(), &ScopeFlags::all_enabled())
            .unwrap();

    for allocation in &estimate.project.allocations {
        assert_close(
            allocation.warranty,
            allocation.client_total * dec!(0.015),
            "warranty identity",
        );
    }
}

#[test]
fn two_vessel_scenario_allocation_conservation() {
    let estimate =
        compute_project_cost(&vessels(), &catalog(), &rates(), &ScopeFlags::all_enabled())
            .unwrap();

    let allocated: Decimal = estimate
        .project
        .allocations
        .iter()
        .map(|a| a.pre_contingency_base)
        .sum();
    assert_close(
        allocated,
        estimate.project.direct_cost_total + estimate.project.pooled.total(),
        "allocation conservation",
    );
}

#[test]
fn two_vessel_scenario_contingency_conservation() {
    let estimate =
        compute_project_cost(&vessels(), &catalog(), &rates(), &ScopeFlags::all_enabled())
            .unwrap();

    let pre_total: Decimal = estimate
        .project
        .allocations
        .iter()
        .map(|a| a.pre_contingency_base)
        .sum();
    let sliced: Decimal = estimate
        .project
        .allocations
        .iter()
        .map(|a| a.contingency)
        .sum();
    assert_close(sliced, pre_total * dec!(0.075), "contingency conservation");
}

// =============================================================================
// scope zeroing
// =============================================================================

#[test]
fn disabling_materials_zeroes_only_the_materials_bucket() {
    let baseline =
        compute_project_cost(&vessels(), &catalog(), &rates(), &ScopeFlags::all_enabled())
            .unwrap();
    let scopes = ScopeFlags {
        materials: false,
        ..ScopeFlags::all_enabled()
    };
    let gated = compute_project_cost(&vessels(), &catalog(), &rates(), &scopes).unwrap();

    for (base, gated) in baseline.vessel_costs.iter().zip(&gated.vessel_costs) {
        assert_eq!(gated.materials_subtotal, dec!(0));
        assert_eq!(gated.labor_subtotal, base.labor_subtotal);
        assert_eq!(gated.equipment_subtotal, base.equipment_subtotal);
    }
}

#[test]
fn disabling_labor_zeroes_only_the_labor_bucket() {
    let baseline =
        compute_project_cost(&vessels(), &catalog(), &rates(), &ScopeFlags::all_enabled())
            .unwrap();
    let scopes = ScopeFlags {
        labor: false,
        ..ScopeFlags::all_enabled()
    };
    let gated = compute_project_cost(&vessels(), &catalog(), &rates(), &scopes).unwrap();

    for (base, gated) in baseline.vessel_costs.iter().zip(&gated.vessel_costs) {
        assert_eq!(gated.labor_subtotal, dec!(0));
        assert_eq!(gated.materials_subtotal, base.materials_subtotal);
        assert_eq!(gated.equipment_subtotal, base.equipment_subtotal);
    }
}

#[test]
fn disabling_warranty_zeroes_the_reserve() {
    let scopes = ScopeFlags {
        warranty: false,
        ..ScopeFlags::all_enabled()
    };
    let estimate = compute_project_cost(&vessels(), &catalog(), &rates(), &scopes).unwrap();

    for allocation in &estimate.project.allocations {
        assert_eq!(allocation.warranty, dec!(0));
    }
}

// =============================================================================
// monotonicity
// =============================================================================

#[test]
fn raising_the_materials_rate_never_lowers_the_client_price() {
    let baseline =
        compute_project_cost(&vessels(), &catalog(), &rates(), &ScopeFlags::all_enabled())
            .unwrap();
    let raised = RateConfiguration {
        materials_rate_per_sqft: NonNegative::new(dec!(7.00)),
        ..rates()
    };
    let estimate =
        compute_project_cost(&vessels(), &catalog(), &raised, &ScopeFlags::all_enabled())
            .unwrap();

    assert!(estimate.project.client_price >= baseline.project.client_price);
}

#[test]
fn raising_the_labor_rate_never_lowers_the_client_price() {
    let baseline =
        compute_project_cost(&vessels(), &catalog(), &rates(), &ScopeFlags::all_enabled())
            .unwrap();
    let raised = RateConfiguration {
        labor_rate_per_sqft: NonNegative::new(dec!(45.00)),
        ..rates()
    };
    let estimate =
        compute_project_cost(&vessels(), &catalog(), &raised, &ScopeFlags::all_enabled())
            .unwrap();

    assert!(estimate.project.client_price >= baseline.project.client_price);
}

#[test]
fn raising_the_freight_rate_never_lowers_the_client_price() {
    let baseline =
        compute_project_cost(&vessels(), &catalog(), &rates(), &ScopeFlags::all_enabled())
            .unwrap();
    let raised = RateConfiguration {
        freight_rate_per_mile: NonNegative::new(dec!(5.25)),
        ..rates()
    };
    let estimate =
        compute_project_cost(&vessels(), &catalog(), &raised, &ScopeFlags::all_enabled())
            .unwrap();

    assert!(estimate.project.client_price >= baseline.project.client_price);
}

// =============================================================================
// failure and degradation scenarios
// =============================================================================

#[test]
fn warranty_rate_of_one_hundred_percent_is_an_error() {
    let degenerate = RateConfiguration {
        warranty_pct: NonNegative::new(dec!(100)),
        ..rates()
    };

    let result =
        compute_project_cost(&vessels(), &catalog(), &degenerate, &ScopeFlags::all_enabled());

    assert_eq!(
        result.unwrap_err(),
        ProjectCostError::WarrantyRateTooHigh(dec!(100))
    );
}

#[test]
fn empty_vessel_list_yields_zero_rollups() {
    let estimate =
        compute_project_cost(&[], &catalog(), &rates(), &ScopeFlags::all_enabled()).unwrap();

    assert!(estimate.vessel_costs.is_empty());
    assert!(estimate.project.allocations.is_empty());
    assert_eq!(estimate.project.client_price, dec!(0));
    assert_eq!(estimate.project.direct_cost_total, dec!(0));
    assert_eq!(estimate.project.pooled.total(), dec!(0));
    assert_eq!(estimate.project.gross_margin_pct, dec!(0));
    assert_eq!(estimate.project.effective_cost_per_sqft, dec!(0));
}

#[test]
fn stale_package_key_degrades_to_zero_equipment() {
    let mut stale = vessels();
    stale[0].equipment_package_key = "deleted-package".into();

    let estimate =
        compute_project_cost(&stale, &catalog(), &rates(), &ScopeFlags::all_enabled()).unwrap();

    assert_eq!(estimate.vessel_costs[0].equipment_subtotal, dec!(0));
    assert!(estimate.project.client_price > Decimal::ZERO);
}

#[test]
fn recomputation_is_deterministic() {
    let first =
        compute_project_cost(&vessels(), &catalog(), &rates(), &ScopeFlags::all_enabled())
            .unwrap();
    let second =
        compute_project_cost(&vessels(), &catalog(), &rates(), &ScopeFlags::all_enabled())
            .unwrap();

    assert_eq!(first, second);
}
