use std::fmt;

use rust_decimal::Decimal;
use wealth_core::calculations::common::{round_currency, saturating_sum};
use wealth_core::{
    CareerSummary, EmploymentInterval, JurisdictionTaxProfile, OverrideMap, ProjectionEngine,
    YearlyBreakdown, estimate_accumulated_wealth,
};

/// Everything printed for one projection run.
#[derive(Debug, Clone)]
pub struct ProjectionReport {
    pub profile: &'static JurisdictionTaxProfile,
    pub evaluation_year: i32,
    pub breakdowns: Vec<YearlyBreakdown>,
    pub summary: CareerSummary,
    pub savings_rate: Decimal,
    pub accumulated_wealth: Decimal,
}

impl ProjectionReport {
    pub fn new(
        engine: ProjectionEngine,
        intervals: &[EmploymentInterval],
        overrides: &OverrideMap,
        savings_rate: Decimal,
    ) -> Self {
        // One clock read for the whole report.
        let evaluation_year = engine.evaluation_year();
        let engine = engine.as_of(evaluation_year);

        let breakdowns = engine.compute_yearly_breakdowns(intervals, overrides);
        let accumulated_wealth = estimate_accumulated_wealth(&breakdowns, savings_rate);

        Self {
            profile: engine.jurisdiction().profile(),
            evaluation_year,
            summary: CareerSummary::from_intervals(intervals, evaluation_year),
            breakdowns,
            savings_rate,
            accumulated_wealth,
        }
    }

    pub fn total_net_income(&self) -> Decimal {
        saturating_sum(self.breakdowns.iter().map(|b| b.net_income))
    }

    fn money(
        &self,
        amount: Decimal,
    ) -> String {
        format_currency(self.profile.currency_symbol, amount)
    }

    fn table_rows(&self) -> Vec<[String; 7]> {
        let mut rows = Vec::with_capacity(self.breakdowns.len() + 2);
        rows.push([
            "Year".to_string(),
            "Gross income".to_string(),
            self.profile.income_tax_label.to_string(),
            self.profile.social_contributions_label.to_string(),
            "Deductions".to_string(),
            "Net income".to_string(),
            "Companies".to_string(),
        ]);

        for b in &self.breakdowns {
            rows.push([
                b.year.to_string(),
                self.money(b.gross_income),
                self.money(b.income_tax),
                self.money(b.social_contributions),
                self.money(b.deductions),
                self.money(b.net_income),
                b.companies.iter().cloned().collect::<Vec<_>>().join(", "),
            ]);
        }

        let total = |f: fn(&YearlyBreakdown) -> Decimal| -> Decimal {
            saturating_sum(self.breakdowns.iter().map(f))
        };
        rows.push([
            "Total".to_string(),
            self.money(total(|b| b.gross_income)),
            self.money(total(|b| b.income_tax)),
            self.money(total(|b| b.social_contributions)),
            self.money(total(|b| b.deductions)),
            self.money(self.total_net_income()),
            String::new(),
        ]);
        rows
    }
}

impl fmt::Display for ProjectionReport {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(
            f,
            "Jurisdiction:   {} ({})",
            self.profile.display_name, self.profile.currency_code
        )?;
        writeln!(f, "As of:          {}", self.evaluation_year)?;
        match self.summary.career_span {
            Some((first, last)) => writeln!(f, "Career span:    {first}-{last}")?,
            None => writeln!(f, "Career span:    —")?,
        }
        writeln!(
            f,
            "Current role:   {}",
            self.summary.current_role.as_deref().unwrap_or("—")
        )?;
        writeln!(f, "Roles:          {}", self.summary.interval_count)?;
        writeln!(
            f,
            "Average income: {}",
            self.money(self.summary.average_annual_income)
        )?;

        if self.breakdowns.is_empty() {
            writeln!(f)?;
            writeln!(f, "No employment history.")?;
        } else {
            let rows = self.table_rows();
            let mut widths = [0usize; 7];
            for row in &rows {
                for (width, cell) in widths.iter_mut().zip(row) {
                    *width = (*width).max(cell.chars().count());
                }
            }

            writeln!(f)?;
            for row in &rows {
                let mut line = format!("{:<w$}", row[0], w = widths[0]);
                for (cell, width) in row[1..6].iter().zip(&widths[1..6]) {
                    line.push_str(&format!("  {cell:>width$}"));
                }
                line.push_str("  ");
                line.push_str(&row[6]);
                writeln!(f, "{}", line.trim_end())?;
            }
        }

        writeln!(f)?;
        writeln!(
            f,
            "Savings rate:   {}%",
            (self.savings_rate * Decimal::ONE_HUNDRED).normalize()
        )?;
        write!(
            f,
            "Accumulated wealth estimate: {}",
            self.money(self.accumulated_wealth)
        )
    }
}

/// Rounds to whole units and groups thousands, e.g. `$1,234,568`.
pub fn format_currency(
    symbol: &str,
    amount: Decimal,
) -> String {
    let rounded = round_currency(amount);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{sign}{symbol}{grouped}")
}
