//! France: one whole-income rate, flat social contributions and allowance.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::TaxComponents;
use super::bands::{WholeIncomeBand, whole_income_tax};

const SOCIAL_CONTRIBUTION_RATE: Decimal = dec!(0.23);
const STANDARD_ALLOWANCE_RATE: Decimal = dec!(0.10);

fn income_tax_bands() -> [WholeIncomeBand; 4] {
    [
        WholeIncomeBand::new(dec!(177106), dec!(0.45)),
        WholeIncomeBand::new(dec!(78570), dec!(0.41)),
        WholeIncomeBand::new(dec!(27478), dec!(0.30)),
        WholeIncomeBand::new(dec!(10777), dec!(0.11)),
    ]
}

pub(super) fn tax(
    income: Decimal,
    _year: i32,
) -> TaxComponents {
    TaxComponents::rounded(
        whole_income_tax(income, &income_tax_bands()),
        income * SOCIAL_CONTRIBUTION_RATE,
        income * STANDARD_ALLOWANCE_RATE,
    )
}
