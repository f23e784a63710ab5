//! Shared helpers for cost calculations: money rounding and percentage
//! conversion.

use rust_decimal::Decimal;

/// Rounds a dollar amount to exactly two decimal places using half-up
/// rounding (midpoints away from zero), the standard financial convention.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use estimate_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a plain-number percentage to a fraction.
///
/// Rate fields store percentages as plain numbers (`7.5` means 7.5%); this
/// is the single point where they are divided by 100.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use estimate_core::calculations::common::percent;
///
/// assert_eq!(percent(dec!(7.5)), dec!(0.075));
/// assert_eq!(percent(dec!(100)), dec!(1));
/// ```
pub fn percent(value: Decimal) -> Decimal {
    value / Decimal::ONE_HUNDRED
}
