//! Shared arithmetic for contribution calculations.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero. Only used when
/// presenting amounts; calculations keep full precision.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use skladka_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Relative change of `difference` against `base`, in percent.
///
/// Returns zero when `base` is zero so callers never see a division error.
/// A ratio too large for [`Decimal`] saturates at [`Decimal::MAX`] or
/// [`Decimal::MIN`], following the sign of `difference`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use skladka_core::calculations::common::percent_change;
///
/// assert_eq!(percent_change(dec!(-50), dec!(200)), dec!(-25));
/// assert_eq!(percent_change(dec!(337.50), dec!(0)), dec!(0));
/// ```
pub fn percent_change(
    difference: Decimal,
    base: Decimal,
) -> Decimal {
    if base.is_zero() {
        return Decimal::ZERO;
    }
    difference
        .checked_div(base)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(if difference.is_sign_negative() == base.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        })
}
