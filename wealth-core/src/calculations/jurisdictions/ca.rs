//! Canada: federal and Ontario provincial tax, CPP and EI premiums.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::TaxComponents;
use super::bands::{WholeIncomeBand, whole_income_tax};

const CPP_MAX_EARNINGS: Decimal = dec!(66600);
const CPP_RATE: Decimal = dec!(0.0595);
const EI_MAX_EARNINGS: Decimal = dec!(63300);
const EI_RATE: Decimal = dec!(0.0163);
const BASIC_PERSONAL_RATE: Decimal = dec!(0.10);

fn federal_bands() -> [WholeIncomeBand; 5] {
    [
        WholeIncomeBand::new(dec!(221708), dec!(0.33)),
        WholeIncomeBand::new(dec!(165430), dec!(0.29)),
        WholeIncomeBand::new(dec!(106717), dec!(0.26)),
        WholeIncomeBand::new(dec!(53359), dec!(0.205)),
        WholeIncomeBand::new(Decimal::ZERO, dec!(0.15)),
    ]
}

fn ontario_bands() -> [WholeIncomeBand; 5] {
    [
        WholeIncomeBand::new(dec!(220000), dec!(0.1316)),
        WholeIncomeBand::new(dec!(150000), dec!(0.1216)),
        WholeIncomeBand::new(dec!(98463), dec!(0.1116)),
        WholeIncomeBand::new(dec!(49231), dec!(0.0915)),
        WholeIncomeBand::new(Decimal::ZERO, dec!(0.0505)),
    ]
}

pub(super) fn tax(
    income: Decimal,
    _year: i32,
) -> TaxComponents {
    let federal = whole_income_tax(income, &federal_bands());
    let provincial = whole_income_tax(income, &ontario_bands());

    let cpp = income.min(CPP_MAX_EARNINGS) * CPP_RATE;
    let ei = income.min(EI_MAX_EARNINGS) * EI_RATE;

    TaxComponents::rounded(federal + provincial, cpp + ei, income * BASIC_PERSONAL_RATE)
}
