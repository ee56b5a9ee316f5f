//! Australia: stacked resident brackets and the Medicare levy.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::TaxComponents;
use super::bands::{StackedBand, stacked_tax};

const MEDICARE_THRESHOLD: Decimal = dec!(23365);
const MEDICARE_RATE: Decimal = dec!(0.02);
const STANDARD_DEDUCTION_RATE: Decimal = dec!(0.08);

fn resident_bands() -> [StackedBand; 4] {
    [
        StackedBand::new(dec!(180000), dec!(51667), dec!(0.45)),
        StackedBand::new(dec!(120000), dec!(29467), dec!(0.37)),
        StackedBand::new(dec!(45000), dec!(5092), dec!(0.325)),
        StackedBand::new(dec!(18200), Decimal::ZERO, dec!(0.19)),
    ]
}

pub(super) fn tax(
    income: Decimal,
    _year: i32,
) -> TaxComponents {
    let medicare_levy = if income > MEDICARE_THRESHOLD {
        income * MEDICARE_RATE
    } else {
        Decimal::ZERO
    };

    TaxComponents::rounded(
        stacked_tax(income, &resident_bands()),
        medicare_levy,
        income * STANDARD_DEDUCTION_RATE,
    )
}
