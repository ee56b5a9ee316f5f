use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Derived financial decomposition of one calendar year.
///
/// `deductions` is a post-tax credit: it is added back to net income after
/// income tax and social contributions are taken out, rather than reducing
/// the taxable base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyBreakdown {
    pub year: i32,
    pub gross_income: Decimal,
    pub income_tax: Decimal,
    pub social_contributions: Decimal,
    pub deductions: Decimal,
    pub net_income: Decimal,
    pub companies: BTreeSet<String>,
}

impl YearlyBreakdown {
    /// Net income implied by the other fields.
    pub fn derive_net_income(
        gross_income: Decimal,
        income_tax: Decimal,
        social_contributions: Decimal,
        deductions: Decimal,
    ) -> Decimal {
        gross_income
            .saturating_sub(income_tax)
            .saturating_sub(social_contributions)
            .saturating_add(deductions)
    }

    /// Income tax plus social contributions.
    pub fn total_levies(&self) -> Decimal {
        self.income_tax.saturating_add(self.social_contributions)
    }

    /// Share of gross income taken by income tax and social contributions.
    /// Zero when there is no gross income.
    pub fn effective_levy_rate(&self) -> Decimal {
        if self.gross_income <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        self.total_levies()
            .checked_div(self.gross_income)
            .unwrap_or(Decimal::MAX)
    }
}
