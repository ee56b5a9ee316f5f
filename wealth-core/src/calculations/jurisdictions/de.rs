//! Germany: one whole-income rate, flat social insurance and standard deduction.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::TaxComponents;
use super::bands::{WholeIncomeBand, whole_income_tax};

// Pension, health, unemployment and care insurance, employee share
const SOCIAL_INSURANCE_RATE: Decimal = dec!(0.20);
const STANDARD_DEDUCTION_RATE: Decimal = dec!(0.12);

fn income_tax_bands() -> [WholeIncomeBand; 3] {
    [
        WholeIncomeBand::new(dec!(277826), dec!(0.45)),
        WholeIncomeBand::new(dec!(62810), dec!(0.42)),
        WholeIncomeBand::new(dec!(10908), dec!(0.25)),
    ]
}

pub(super) fn tax(
    income: Decimal,
    _year: i32,
) -> TaxComponents {
    TaxComponents::rounded(
        whole_income_tax(income, &income_tax_bands()),
        income * SOCIAL_INSURANCE_RATE,
        income * STANDARD_DEDUCTION_RATE,
    )
}
