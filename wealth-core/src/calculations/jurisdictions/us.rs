//! United States: federal plus a flat state rate, FICA, standard-or-itemized deduction.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::TaxComponents;
use super::bands::{WholeIncomeBand, whole_income_tax};

const STATE_RATE: Decimal = dec!(0.08);
const SOCIAL_SECURITY_WAGE_BASE: Decimal = dec!(160200);
const SOCIAL_SECURITY_RATE: Decimal = dec!(0.062);
const MEDICARE_RATE: Decimal = dec!(0.0145);
const ADDITIONAL_MEDICARE_THRESHOLD: Decimal = dec!(200000);
const ADDITIONAL_MEDICARE_RATE: Decimal = dec!(0.009);
const STANDARD_DEDUCTION: Decimal = dec!(13850);
const ITEMIZED_DEDUCTION_RATE: Decimal = dec!(0.15);

fn federal_bands() -> [WholeIncomeBand; 7] {
    [
        WholeIncomeBand::new(dec!(578125), dec!(0.37)),
        WholeIncomeBand::new(dec!(231250), dec!(0.35)),
        WholeIncomeBand::new(dec!(182050), dec!(0.32)),
        WholeIncomeBand::new(dec!(95450), dec!(0.24)),
        WholeIncomeBand::new(dec!(44725), dec!(0.22)),
        WholeIncomeBand::new(dec!(11000), dec!(0.12)),
        WholeIncomeBand::new(Decimal::ZERO, dec!(0.10)),
    ]
}

pub(super) fn tax(
    income: Decimal,
    _year: i32,
) -> TaxComponents {
    let federal = whole_income_tax(income, &federal_bands());
    let state = income * STATE_RATE;

    let social_security = income.min(SOCIAL_SECURITY_WAGE_BASE) * SOCIAL_SECURITY_RATE;
    let additional_medicare = if income > ADDITIONAL_MEDICARE_THRESHOLD {
        (income - ADDITIONAL_MEDICARE_THRESHOLD) * ADDITIONAL_MEDICARE_RATE
    } else {
        Decimal::ZERO
    };
    let medicare = income * MEDICARE_RATE + additional_medicare;

    let deductions = STANDARD_DEDUCTION.max(income * ITEMIZED_DEDUCTION_RATE);

    TaxComponents::rounded(federal + state, social_security + medicare, deductions)
}
