use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A dollar amount, rate, or linear dimension guaranteed to be non-negative.
///
/// Construction clamps negative values to zero instead of erroring: a
/// half-edited form field is a valid transient state of the input snapshot,
/// not a failure. [`Decimal`] has no NaN or infinity, so non-finite input
/// cannot occur.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use estimate_core::NonNegative;
///
/// assert_eq!(NonNegative::new(dec!(12.50)).get(), dec!(12.50));
/// assert_eq!(NonNegative::new(dec!(-3.00)).get(), dec!(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "Decimal")]
pub struct NonNegative(Decimal);

impl NonNegative {
    /// Zero, the clamp floor and the additive identity.
    pub const ZERO: NonNegative = NonNegative(Decimal::ZERO);

    /// Creates a non-negative value, clamping negative input to zero.
    pub fn new(value: Decimal) -> Self {
        if value < Decimal::ZERO {
            warn!(%value, "negative input clamped to zero");
            return Self(Decimal::ZERO);
        }
        Self(value)
    }

    /// Returns the underlying decimal value.
    pub fn get(&self) -> Decimal {
        self.0
    }

    /// Returns `true` if the value is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<Decimal> for NonNegative {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl From<NonNegative> for Decimal {
    fn from(value: NonNegative) -> Self {
        value.0
    }
}

impl fmt::Display for NonNegative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
