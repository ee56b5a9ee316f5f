//! Hong Kong: progressive salaries tax capped at the standard rate, MPF.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::TaxComponents;
use super::bands::{StackedBand, stacked_tax};
use crate::calculations::common::round_currency;

const STANDARD_RATE: Decimal = dec!(0.17);
const MPF_MIN_RELEVANT_INCOME: Decimal = dec!(7100);
const MPF_MAX_RELEVANT_INCOME: Decimal = dec!(1500000);
const MPF_RATE: Decimal = dec!(0.05);
const BASIC_ALLOWANCE: Decimal = dec!(132000);

fn progressive_bands() -> [StackedBand; 5] {
    [
        StackedBand::new(dec!(200000), dec!(30000), dec!(0.17)),
        StackedBand::new(dec!(150000), dec!(22500), dec!(0.12)),
        StackedBand::new(dec!(100000), dec!(15000), dec!(0.07)),
        StackedBand::new(dec!(50000), dec!(7500), dec!(0.06)),
        StackedBand::new(Decimal::ZERO, Decimal::ZERO, dec!(0.02)),
    ]
}

pub(super) fn tax(
    income: Decimal,
    _year: i32,
) -> TaxComponents {
    let progressive = round_currency(stacked_tax(income, &progressive_bands()));
    let standard = round_currency(income * STANDARD_RATE);

    let relevant_income = (income - MPF_MIN_RELEVANT_INCOME)
        .max(Decimal::ZERO)
        .min(MPF_MAX_RELEVANT_INCOME);

    TaxComponents::rounded(
        progressive.min(standard),
        relevant_income * MPF_RATE,
        BASIC_ALLOWANCE,
    )
}
