//! Common helpers for payout calculations.
//!
//! Every figure in a [`CalculationResult`](crate::CalculationResult) is kept
//! exact; these helpers produce the two-decimal values that are shown to
//! sellers and written to reports.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero, matching how settlement
/// statements present paise.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payout_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(454.7838)), dec!(454.78));
/// assert_eq!(round_half_up(dec!(741.3162)), dec!(741.32));
/// assert_eq!(round_half_up(dec!(0.125)), dec!(0.13));
/// assert_eq!(round_half_up(dec!(-54.005)), dec!(-54.01)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
