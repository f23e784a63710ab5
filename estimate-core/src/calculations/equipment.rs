//! Equipment Resolver: looks up the package assigned to a vessel and sums
//! its line-item costs.

use rust_decimal::Decimal;
use tracing::warn;

use crate::models::{EquipmentPackage, VesselType};

/// Resolves a vessel's equipment cost from the package catalog.
///
/// Returns the total cost of the unique package whose key matches AND whose
/// applicability set includes the vessel's type. A stale key or a type
/// mismatch yields zero: the UI is expected to always assign a valid
/// package, so an unresolvable one is a valid transient state, not an error.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use estimate_core::calculations::equipment::resolve_package_cost;
/// use estimate_core::{EquipmentPackage, LineItem, NonNegative, VesselType};
///
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
/// let cost = resolve_package_cost(&catalog, "plunge-basic", VesselType::ColdPlunge);
/// assert_eq!(cost, dec!(5450.00));
///
/// // Type mismatch degrades to zero.
/// let cost = resolve_package_cost(&catalog, "plunge-basic", VesselType::HotTub);
/// assert_eq!(cost, dec!(0));
/// ```
pub fn resolve_package_cost(
    catalog: &[EquipmentPackage],
    package_key: &str,
    vessel_type: VesselType,
) -> Decimal {
    let package = catalog
        .iter()
        .find(|p| p.key == package_key && p.is_applicable_to(vessel_type));

    match package {
        Some(package) => package.total_cost(),
        None => {
            warn!(
                package_key,
                ?vessel_type,
                "no applicable equipment package; treating equipment cost as zero"
            );
            Decimal::ZERO
        }
    }
}
