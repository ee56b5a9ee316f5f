//! Common utility functions for tax calculations.
//!
//! Rounding, clamping, and the evaluation clock shared by every
//! jurisdiction and by the projection engine.

use chrono::{Datelike, Local};
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to the nearest whole currency unit.
///
/// Midpoints round away from zero, so `0.5` becomes `1`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use wealth_core::calculations::common::round_currency;
///
/// assert_eq!(round_currency(dec!(11474.5)), dec!(11475));
/// assert_eq!(round_currency(dec!(11474.49)), dec!(11474));
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps negative amounts to zero.
pub fn non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// Sums amounts, saturating at the bounds of [`Decimal`] instead of
/// panicking on overflow.
pub fn saturating_sum<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// The calendar year on the local clock, read fresh on every call.
pub fn current_calendar_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // saturating_sum tests
    // =========================================================================

    #[test]
    fn saturating_sum_adds_ordinary_amounts() {
        assert_eq!(saturating_sum([dec!(1.5), dec!(2), dec!(-0.5)]), dec!(3));
    }

    #[test]
    fn saturating_sum_of_nothing_is_zero() {
        assert_eq!(saturating_sum(Vec::<Decimal>::new()), Decimal::ZERO);
    }

    #[test]
    fn saturating_sum_clamps_at_max() {
        assert_eq!(saturating_sum([Decimal::MAX, Decimal::ONE]), Decimal::MAX);
        assert_eq!(saturating_sum([Decimal::MIN, dec!(-1)]), Decimal::MIN);
    }

    // =========================================================================
    // round_currency tests
    // =========================================================================

    #[test]
    fn round_currency_rounds_down_below_midpoint() {
        assert_eq!(round_currency(dec!(123.49)), dec!(123));
    }

    #[test]
    fn round_currency_rounds_up_at_midpoint() {
        assert_eq!(round_currency(dec!(123.5)), dec!(124));
    }

    #[test]
    fn round_currency_preserves_whole_values() {
        assert_eq!(round_currency(dec!(48000)), dec!(48000));
    }

    #[test]
    fn round_currency_handles_zero() {
        assert_eq!(round_currency(Decimal::ZERO), Decimal::ZERO);
    }

    // =========================================================================
    // non_negative tests
    // =========================================================================

    #[test]
    fn non_negative_clamps_negative_values() {
        assert_eq!(non_negative(dec!(-5000)), Decimal::ZERO);
    }

    #[test]
    fn non_negative_keeps_positive_values() {
        assert_eq!(non_negative(dec!(5000)), dec!(5000));
    }

    #[test]
    fn current_calendar_year_is_plausible() {
        assert!(current_calendar_year() >= 2024);
    }
}
