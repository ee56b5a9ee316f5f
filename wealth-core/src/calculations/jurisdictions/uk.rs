//! United Kingdom: income tax, employee National Insurance, tapered personal allowance.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::TaxComponents;
use super::bands::{WholeIncomeBand, whole_income_tax};
use crate::calculations::common::non_negative;

const NI_PRIMARY_THRESHOLD: Decimal = dec!(12570);
const NI_UPPER_EARNINGS_LIMIT: Decimal = dec!(50270);
const NI_MAIN_RATE: Decimal = dec!(0.12);
const NI_UPPER_RATE: Decimal = dec!(0.02);
const PERSONAL_ALLOWANCE: Decimal = dec!(12570);
const ALLOWANCE_TAPER_START: Decimal = dec!(100000);
const ALLOWANCE_TAPER_RATE: Decimal = dec!(0.5);

fn income_tax_bands() -> [WholeIncomeBand; 3] {
    [
        WholeIncomeBand::new(dec!(125140), dec!(0.45)),
        WholeIncomeBand::new(dec!(50270), dec!(0.40)),
        WholeIncomeBand::new(dec!(12570), dec!(0.20)),
    ]
}

fn national_insurance(income: Decimal) -> Decimal {
    if income > NI_UPPER_EARNINGS_LIMIT {
        (NI_UPPER_EARNINGS_LIMIT - NI_PRIMARY_THRESHOLD) * NI_MAIN_RATE
            + (income - NI_UPPER_EARNINGS_LIMIT) * NI_UPPER_RATE
    } else if income > NI_PRIMARY_THRESHOLD {
        (income - NI_PRIMARY_THRESHOLD) * NI_MAIN_RATE
    } else {
        Decimal::ZERO
    }
}

fn personal_allowance(income: Decimal) -> Decimal {
    let taper = non_negative((income - ALLOWANCE_TAPER_START) * ALLOWANCE_TAPER_RATE);
    non_negative(PERSONAL_ALLOWANCE - taper)
}

pub(super) fn tax(
    income: Decimal,
    _year: i32,
) -> TaxComponents {
    TaxComponents::rounded(
        whole_income_tax(income, &income_tax_bands()),
        national_insurance(income),
        personal_allowance(income),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn higher_rate_taxpayer() {
        let result = tax(dec!(60000), 2023);

        assert_eq!(result.income_tax, dec!(24000));
        // 37700 × 12% + 9730 × 2% = 4718.6
        assert_eq!(result.social_contributions, dec!(4719));
        assert_eq!(result.deductions, dec!(12570));
    }

    #[test]
    fn allowance_tapers_above_100k() {
        let result = tax(dec!(110000), 2023);

        assert_eq!(result.deductions, dec!(7570));
        assert_eq!(result.social_contributions, dec!(5719));
    }

    #[test]
    fn allowance_fully_withdrawn() {
        let result = tax(dec!(130000), 2023);

        assert_eq!(result.income_tax, dec!(58500));
        assert_eq!(result.deductions, Decimal::ZERO);
    }

    #[test]
    fn below_personal_allowance() {
        let result = tax(dec!(12000), 2023);

        assert_eq!(result.income_tax, Decimal::ZERO);
        assert_eq!(result.social_contributions, Decimal::ZERO);
        assert_eq!(result.deductions, dec!(12570));
    }
}
