//! Currency-safe rounding primitives.
//!
//! Every computed amount in the engine passes through [`round`] (or the
//! two-decimal shortcut [`round2`]) before it is compared, stored, or
//! displayed. Amounts are [`Decimal`] values, so arithmetic is exact and
//! the only lossy step is the explicit rounding performed here.

use rust_decimal::{Decimal, RoundingStrategy};

/// The default decimal scale for monetary amounts.
pub const DEFAULT_SCALE: u32 = 2;

/// The maximum decimal scale a workspace may configure.
pub const MAX_SCALE: u32 = 6;

/// Rounds a monetary amount half-away-from-zero at the given scale.
///
/// The scale is clamped to `0..=6`; out-of-range caller input is silently
/// clamped, not rejected. Rounding is idempotent: `round(round(x, s), s)`
/// always equals `round(x, s)`.
///
/// # Examples
///
/// ```
/// use billing_engine::money::round;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("300.005").unwrap();
/// assert_eq!(round(amount, 2), Decimal::from_str("300.01").unwrap());
///
/// let negative = Decimal::from_str("-2.675").unwrap();
/// assert_eq!(round(negative, 2), Decimal::from_str("-2.68").unwrap());
/// ```
pub fn round(amount: Decimal, scale: u32) -> Decimal {
    let scale = scale.min(MAX_SCALE);
    let mut rounded = amount.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    // Pin the scale so 16300 renders as 16300.00, not 16300
    rounded.rescale(scale);
    rounded
}

/// Rounds a monetary amount to the default two decimal places.
pub fn round2(amount: Decimal) -> Decimal {
    round(amount, DEFAULT_SCALE)
}

/// Treats an absent amount as zero.
///
/// Optional money fields on caller input (overtime rate, bonus, ad-hoc
/// deductions) degrade to zero rather than failing the computation.
pub fn or_zero(value: Option<Decimal>) -> Decimal {
    value.unwrap_or(Decimal::ZERO)
}
