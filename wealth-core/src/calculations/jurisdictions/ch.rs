//! Switzerland: direct federal tax only, AHV/IV/EO and ALV contributions.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::TaxComponents;
use super::bands::{WholeIncomeBand, whole_income_tax};

const CONTRIBUTION_CEILING: Decimal = dec!(148200);
const CONTRIBUTION_RATE: Decimal = dec!(0.0635);
const STANDARD_DEDUCTION_RATE: Decimal = dec!(0.08);

fn federal_bands() -> [WholeIncomeBand; 3] {
    [
        WholeIncomeBand::new(dec!(755200), dec!(0.115)),
        WholeIncomeBand::new(dec!(134600), dec!(0.08)),
        WholeIncomeBand::new(dec!(31600), dec!(0.05)),
    ]
}

pub(super) fn tax(
    income: Decimal,
    _year: i32,
) -> TaxComponents {
    TaxComponents::rounded(
        whole_income_tax(income, &federal_bands()),
        income.min(CONTRIBUTION_CEILING) * CONTRIBUTION_RATE,
        income * STANDARD_DEDUCTION_RATE,
    )
}
