//! Accumulated wealth under a fixed savings-rate assumption.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::common::saturating_sum;
use crate::models::YearlyBreakdown;

/// Fraction of net income assumed to be saved each year.
pub const DEFAULT_SAVINGS_RATE: Decimal = dec!(0.15);

/// Sums `net_income × savings_rate` over every year. No compounding or
/// investment return is modelled. Saturates instead of overflowing.
pub fn estimate_accumulated_wealth(
    breakdowns: &[YearlyBreakdown],
    savings_rate: Decimal,
) -> Decimal {
    saturating_sum(
        breakdowns
            .iter()
            .map(|b| b.net_income.saturating_mul(savings_rate)),
    )
}
