//! Headline figures about a prospect's career, independent of jurisdiction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::saturating_sum;
use crate::models::EmploymentInterval;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerSummary {
    /// First start year and last end year (ongoing resolves to the current year).
    pub career_span: Option<(i32, i32)>,
    /// Mean of the per-interval annual incomes.
    pub average_annual_income: Decimal,
    pub interval_count: usize,
    /// "Position at Company" of the first ongoing interval.
    pub current_role: Option<String>,
}

impl CareerSummary {
    pub fn from_intervals(
        intervals: &[EmploymentInterval],
        current_year: i32,
    ) -> Self {
        let career_span = intervals
            .iter()
            .map(|i| i.start_year)
            .min()
            .zip(
                intervals
                    .iter()
                    .map(|i| i.effective_end_year(current_year))
                    .max(),
            );

        let average_annual_income = if intervals.is_empty() {
            Decimal::ZERO
        } else {
            let total = saturating_sum(intervals.iter().map(|i| i.annual_gross_income));
            total / Decimal::from(intervals.len())
        };

        let current_role = intervals
            .iter()
            .find(|i| i.is_ongoing())
            .map(|i| format!("{} at {}", i.position, i.company));

        Self {
            career_span,
            average_annual_income,
            interval_count: intervals.len(),
            current_role,
        }
    }
}
