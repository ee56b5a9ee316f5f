//! Singapore: stacked resident brackets and employee CPF.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::TaxComponents;
use super::bands::{StackedBand, stacked_tax};

const CPF_WAGE_CEILING: Decimal = dec!(102000);
const CPF_EMPLOYEE_RATE: Decimal = dec!(0.20);
const PERSONAL_RELIEF_RATE: Decimal = dec!(0.05);

fn resident_bands() -> [StackedBand; 7] {
    [
        StackedBand::new(dec!(1000000), dec!(176950), dec!(0.24)),
        StackedBand::new(dec!(320000), dec!(47200), dec!(0.22)),
        StackedBand::new(dec!(200000), dec!(21200), dec!(0.18)),
        StackedBand::new(dec!(120000), dec!(7200), dec!(0.15)),
        StackedBand::new(dec!(80000), dec!(3200), dec!(0.11)),
        StackedBand::new(dec!(40000), dec!(550), dec!(0.07)),
        StackedBand::new(dec!(20000), Decimal::ZERO, dec!(0.0375)),
    ]
}

pub(super) fn tax(
    income: Decimal,
    _year: i32,
) -> TaxComponents {
    TaxComponents::rounded(
        stacked_tax(income, &resident_bands()),
        income.min(CPF_WAGE_CEILING) * CPF_EMPLOYEE_RATE,
        income * PERSONAL_RELIEF_RATE,
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn cpf_capped_at_wage_ceiling() {
        let result = tax(dec!(150000), 2023);

        assert_eq!(result.income_tax, dec!(11700));
        assert_eq!(result.social_contributions, dec!(20400));
        assert_eq!(result.deductions, dec!(7500));
    }

    #[test]
    fn lowest_taxable_band() {
        let result = tax(dec!(30000), 2023);

        assert_eq!(result.income_tax, dec!(375));
        assert_eq!(result.social_contributions, dec!(6000));
        assert_eq!(result.deductions, dec!(1500));
    }

    #[test]
    fn no_tax_below_twenty_thousand() {
        assert_eq!(tax(dec!(20000), 2023).income_tax, Decimal::ZERO);
    }
}
