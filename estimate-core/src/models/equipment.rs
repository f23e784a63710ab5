use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{NonNegative, VesselType};

/// One priced row inside an equipment package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    pub cost: NonNegative,
}

/// A named bundle of priced equipment line items.
///
/// Line items are independently editable; the package-to-vessel-type
/// applicability is fixed when the package is defined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentPackage {
    /// Unique key referenced by [`crate::Vessel::equipment_package_key`].
    pub key: String,
    pub label: String,
    /// Vessel types this package may be assigned to.
    pub applies_to: Vec<VesselType>,
    pub line_items: Vec<LineItem>,
}

impl EquipmentPackage {
    /// Sum of the package's line-item costs.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use estimate_core::{EquipmentPackage, LineItem, NonNegative, VesselType};
    ///
    /// let package = EquipmentPackage {
    ///     key: "plunge-basic".into(),
    ///     label: "Cold Plunge Basic".into(),
    ///     applies_to: vec![VesselType::ColdPlunge],
    ///     line_items: vec![
    ///         LineItem { label: "Chiller".into(), cost: NonNegative::new(dec!(4800.00)) },
    ///         LineItem { label: "Pump".into(), cost: NonNegative::new(dec!(650.00)) },
    ///     ],
    /// };
    ///
    /// assert_eq!(package.total_cost(), dec!(5450.00));
    /// ```
    pub fn total_cost(&self) -> Decimal {
        self.line_items
            .iter()
            .map(|item| item.cost.get())
            .sum()
    }

    /// Returns `true` if this package may be assigned to the given vessel type.
    pub fn is_applicable_to(&self, vessel_type: VesselType) -> bool {
        self.applies_to.contains(&vessel_type)
    }
}
