//! Japan: national income tax plus flat resident tax, social insurance.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::TaxComponents;
use super::bands::{WholeIncomeBand, whole_income_tax};

const RESIDENT_TAX_RATE: Decimal = dec!(0.10);
const SOCIAL_INSURANCE_RATE: Decimal = dec!(0.15);
const BASIC_DEDUCTION: Decimal = dec!(480000);

fn national_bands() -> [WholeIncomeBand; 7] {
    [
        WholeIncomeBand::new(dec!(40000000), dec!(0.45)),
        WholeIncomeBand::new(dec!(18000000), dec!(0.40)),
        WholeIncomeBand::new(dec!(9000000), dec!(0.33)),
        WholeIncomeBand::new(dec!(6950000), dec!(0.23)),
        WholeIncomeBand::new(dec!(3300000), dec!(0.20)),
        WholeIncomeBand::new(dec!(1950000), dec!(0.10)),
        WholeIncomeBand::new(Decimal::ZERO, dec!(0.05)),
    ]
}

pub(super) fn tax(
    income: Decimal,
    _year: i32,
) -> TaxComponents {
    let national = whole_income_tax(income, &national_bands());
    let resident = income * RESIDENT_TAX_RATE;

    TaxComponents::rounded(
        national + resident,
        income * SOCIAL_INSURANCE_RATE,
        BASIC_DEDUCTION,
    )
}
