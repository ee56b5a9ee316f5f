//! Per-jurisdiction tax functions and their static profiles.
//!
//! Every supported [`Jurisdiction`] maps to exactly one
//! [`JurisdictionTaxProfile`] in a static table. A profile carries the
//! currency and terminology used when presenting results, plus the pure
//! function that turns a year's combined gross income into its
//! [`TaxComponents`].
//!
//! | Code | Income tax | Social contributions | Deductions (post-tax credit) |
//! |------|------------|----------------------|------------------------------|
//! | US | whole-income federal rate (10%–37%) + 8% state | SS 6.2% to 160,200 + Medicare 1.45% + 0.9% over 200,000 | max(13,850, 15%) |
//! | UK | whole-income rate (20%/40%/45%) | NI 12% on 12,570–50,270, 2% above | personal allowance tapered over 100,000 |
//! | CA | whole-income federal (15%–33%) + Ontario (5.05%–13.16%) | CPP 5.95% to 66,600 + EI 1.63% to 63,300 | 10% |
//! | AU | stacked brackets | Medicare levy 2% over 23,365 | 8% |
//! | DE | whole-income rate (25%/42%/45%) | 20% | 12% |
//! | FR | whole-income rate (11%/30%/41%/45%) | 23% | 10% |
//! | CH | whole-income federal rate (5%/8%/11.5%) | 6.35% to 148,200 | 8% |
//! | SG | stacked brackets | CPF 20% to 102,000 | 5% |
//! | HK | stacked brackets, capped at 17% of gross | MPF 5% of income over 7,100, base capped at 1,500,000 | 132,000 |
//! | JP | whole-income national rate (5%–45%) + 10% resident | 15% | 480,000 |
//!
//! "Whole-income" regimes apply the single highest rate the income reaches
//! to the entire income instead of accumulating across bands. This matches
//! the figures prospects have already been shown and is kept as-is.

mod au;
mod bands;
mod ca;
mod ch;
mod de;
mod fr;
mod hk;
mod jp;
mod sg;
mod uk;
mod us;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{non_negative, round_currency};
use crate::models::Jurisdiction;

/// The three levies/credits a jurisdiction derives from gross income.
///
/// All amounts are whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxComponents {
    pub income_tax: Decimal,
    pub social_contributions: Decimal,
    /// Post-tax credit added back to net income.
    pub deductions: Decimal,
}

impl TaxComponents {
    /// Builds components from unrounded amounts, rounding each independently.
    pub(crate) fn rounded(
        income_tax: Decimal,
        social_contributions: Decimal,
        deductions: Decimal,
    ) -> Self {
        Self {
            income_tax: round_currency(income_tax),
            social_contributions: round_currency(social_contributions),
            deductions: round_currency(deductions),
        }
    }
}

/// Signature shared by every jurisdiction's tax function.
///
/// Receives a non-negative gross income and the calendar year it was earned in.
pub type TaxFn = fn(Decimal, i32) -> TaxComponents;

/// Static description of one tax regime.
#[derive(Debug)]
pub struct JurisdictionTaxProfile {
    pub jurisdiction: Jurisdiction,
    pub display_name: &'static str,
    pub currency_symbol: &'static str,
    pub currency_code: &'static str,
    pub income_tax_label: &'static str,
    pub social_contributions_label: &'static str,
    compute: TaxFn,
}

impl JurisdictionTaxProfile {
    /// Applies this regime to a year's combined gross income.
    ///
    /// Zero or negative income yields zero tax and contributions and the
    /// regime's baseline deduction.
    pub fn tax(
        &self,
        gross_income: Decimal,
        year: i32,
    ) -> TaxComponents {
        (self.compute)(non_negative(gross_income), year)
    }
}

static PROFILES: [JurisdictionTaxProfile; 10] = [
    JurisdictionTaxProfile {
        jurisdiction: Jurisdiction::UnitedStates,
        display_name: "United States",
        currency_symbol: "$",
        currency_code: "USD",
        income_tax_label: "Income Tax",
        social_contributions_label: "Social Security/Medicare",
        compute: us::tax,
    },
    JurisdictionTaxProfile {
        jurisdiction: Jurisdiction::UnitedKingdom,
        display_name: "United Kingdom",
        currency_symbol: "£",
        currency_code: "GBP",
        income_tax_label: "Income Tax",
        social_contributions_label: "National Insurance",
        compute: uk::tax,
    },
    JurisdictionTaxProfile {
        jurisdiction: Jurisdiction::Canada,
        display_name: "Canada",
        currency_symbol: "C$",
        currency_code: "CAD",
        income_tax_label: "Income Tax",
        social_contributions_label: "CPP/EI",
        compute: ca::tax,
    },
    JurisdictionTaxProfile {
        jurisdiction: Jurisdiction::Australia,
        display_name: "Australia",
        currency_symbol: "A$",
        currency_code: "AUD",
        income_tax_label: "Income Tax",
        social_contributions_label: "Medicare Levy",
        compute: au::tax,
    },
    JurisdictionTaxProfile {
        jurisdiction: Jurisdiction::Germany,
        display_name: "Germany",
        currency_symbol: "€",
        currency_code: "EUR",
        income_tax_label: "Income Tax",
        social_contributions_label: "Social Insurance",
        compute: de::tax,
    },
    JurisdictionTaxProfile {
        jurisdiction: Jurisdiction::France,
        display_name: "France",
        currency_symbol: "€",
        currency_code: "EUR",
        income_tax_label: "Income Tax",
        social_contributions_label: "Social Contributions",
        compute: fr::tax,
    },
    JurisdictionTaxProfile {
        jurisdiction: Jurisdiction::Switzerland,
        display_name: "Switzerland",
        currency_symbol: "CHF",
        currency_code: "CHF",
        income_tax_label: "Federal Tax",
        social_contributions_label: "AHV/ALV",
        compute: ch::tax,
    },
    JurisdictionTaxProfile {
        jurisdiction: Jurisdiction::Singapore,
        display_name: "Singapore",
        currency_symbol: "S$",
        currency_code: "SGD",
        income_tax_label: "Income Tax",
        social_contributions_label: "CPF",
        compute: sg::tax,
    },
    JurisdictionTaxProfile {
        jurisdiction: Jurisdiction::HongKong,
        display_name: "Hong Kong",
        currency_symbol: "HK$",
        currency_code: "HKD",
        income_tax_label: "Salaries Tax",
        social_contributions_label: "MPF",
        compute: hk::tax,
    },
    JurisdictionTaxProfile {
        jurisdiction: Jurisdiction::Japan,
        display_name: "Japan",
        currency_symbol: "¥",
        currency_code: "JPY",
        income_tax_label: "Income Tax",
        social_contributions_label: "Social Insurance",
        compute: jp::tax,
    },
];

/// Looks up the static profile for `jurisdiction`.
pub fn profile(jurisdiction: Jurisdiction) -> &'static JurisdictionTaxProfile {
    &PROFILES[jurisdiction.index()]
}

impl Jurisdiction {
    pub fn profile(self) -> &'static JurisdictionTaxProfile {
        profile(self)
    }
}

/// Computes income tax, social contributions and deductions for one year's
/// combined gross income under `jurisdiction`.
pub fn jurisdiction_tax(
    jurisdiction: Jurisdiction,
    gross_income: Decimal,
    year: i32,
) -> TaxComponents {
    profile(jurisdiction).tax(gross_income, year)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn profile_table_matches_declaration_order() {
        for jurisdiction in Jurisdiction::ALL {
            assert_eq!(profile(jurisdiction).jurisdiction, jurisdiction);
        }
    }

    #[test]
    fn zero_income_yields_only_baseline_deduction() {
        let baselines = [
            (Jurisdiction::UnitedStates, dec!(13850)),
            (Jurisdiction::UnitedKingdom, dec!(12570)),
            (Jurisdiction::HongKong, dec!(132000)),
            (Jurisdiction::Japan, dec!(480000)),
            (Jurisdiction::Germany, Decimal::ZERO),
        ];

        for (jurisdiction, deduction) in baselines {
            let components = jurisdiction_tax(jurisdiction, Decimal::ZERO, 2024);

            assert_eq!(components.income_tax, Decimal::ZERO, "{jurisdiction}");
            assert_eq!(components.social_contributions, Decimal::ZERO, "{jurisdiction}");
            assert_eq!(components.deductions, deduction, "{jurisdiction}");
        }
    }

    #[test]
    fn negative_income_is_treated_as_zero() {
        for jurisdiction in Jurisdiction::ALL {
            assert_eq!(
                jurisdiction_tax(jurisdiction, dec!(-50000), 2024),
                jurisdiction_tax(jurisdiction, Decimal::ZERO, 2024),
                "{jurisdiction}"
            );
        }
    }

    #[test]
    fn levies_are_never_negative() {
        let incomes = [
            dec!(0),
            dec!(1),
            dec!(9999.99),
            dec!(50000),
            dec!(123456.78),
            dec!(1000000),
            dec!(50000000),
        ];

        for jurisdiction in Jurisdiction::ALL {
            for income in incomes {
                let components = jurisdiction_tax(jurisdiction, income, 2024);

                assert!(components.income_tax >= Decimal::ZERO, "{jurisdiction} {income}");
                assert!(components.social_contributions >= Decimal::ZERO, "{jurisdiction} {income}");
                assert!(components.deductions >= Decimal::ZERO, "{jurisdiction} {income}");
            }
        }
    }

    #[test]
    fn components_are_whole_units() {
        for jurisdiction in Jurisdiction::ALL {
            let components = jurisdiction_tax(jurisdiction, dec!(87654.32), 2024);

            assert_eq!(components.income_tax.fract(), Decimal::ZERO, "{jurisdiction}");
            assert_eq!(components.social_contributions.fract(), Decimal::ZERO, "{jurisdiction}");
            assert_eq!(components.deductions.fract(), Decimal::ZERO, "{jurisdiction}");
        }
    }

    #[test]
    fn profile_exposes_currency_and_labels() {
        let hk = Jurisdiction::HongKong.profile();

        assert_eq!(hk.currency_symbol, "HK$");
        assert_eq!(hk.currency_code, "HKD");
        assert_eq!(hk.income_tax_label, "Salaries Tax");
        assert_eq!(hk.social_contributions_label, "MPF");
        assert_eq!(hk.display_name, "Hong Kong");
    }
}
