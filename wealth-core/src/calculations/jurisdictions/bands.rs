//! Bracket helpers shared by the jurisdiction tables.
//!
//! Both helpers expect bands ordered from the highest threshold down and
//! select the first band whose threshold the income strictly exceeds.

use rust_decimal::Decimal;

/// A rate applied to the whole income once it exceeds `above`.
#[derive(Debug, Clone, Copy)]
pub(super) struct WholeIncomeBand {
    pub above: Decimal,
    pub rate: Decimal,
}

impl WholeIncomeBand {
    pub fn new(
        above: Decimal,
        rate: Decimal,
    ) -> Self {
        Self { above, rate }
    }
}

/// A base amount plus a marginal rate on the income above `above`.
#[derive(Debug, Clone, Copy)]
pub(super) struct StackedBand {
    pub above: Decimal,
    pub base_tax: Decimal,
    pub rate: Decimal,
}

impl StackedBand {
    pub fn new(
        above: Decimal,
        base_tax: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            above,
            base_tax,
            rate,
        }
    }
}

/// Rate of the highest band `income` reaches, or zero below every band.
pub(super) fn whole_income_rate(
    income: Decimal,
    bands: &[WholeIncomeBand],
) -> Decimal {
    bands
        .iter()
        .find(|band| income > band.above)
        .map_or(Decimal::ZERO, |band| band.rate)
}

/// `income` taxed at the single rate of the highest band it reaches.
pub(super) fn whole_income_tax(
    income: Decimal,
    bands: &[WholeIncomeBand],
) -> Decimal {
    income * whole_income_rate(income, bands)
}

/// Accumulated tax across stacked bands, or zero below every band.
pub(super) fn stacked_tax(
    income: Decimal,
    bands: &[StackedBand],
) -> Decimal {
    bands
        .iter()
        .find(|band| income > band.above)
        .map_or(Decimal::ZERO, |band| {
            band.base_tax + (income - band.above) * band.rate
        })
}
