//! Per-year projection of employment intervals into financial breakdowns.
//!
//! # Algorithm
//!
//! 1. Expand every interval to the inclusive years it covers, resolving an
//!    ongoing interval to the evaluation year.
//! 2. Sum gross income per year across every interval active that year and
//!    collect the contributing companies.
//! 3. Apply the jurisdiction's tax function to each year's combined income,
//!    so concurrent roles share a bracket.
//! 4. Layer any caller-pinned overrides on top, field by field, and derive
//!    net income from the final fields.
//! 5. Emit years in ascending order. Years no interval covers are absent.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use wealth_core::{EmploymentInterval, Jurisdiction, OverrideMap, ProjectionEngine};
//!
//! let intervals = vec![EmploymentInterval::new(
//!     "Acme",
//!     "Engineer",
//!     2020,
//!     Some(2022),
//!     dec!(150000),
//! )];
//!
//! let engine = ProjectionEngine::new(Jurisdiction::UnitedStates).as_of(2025);
//! let breakdowns = engine.compute_yearly_breakdowns(&intervals, &OverrideMap::new());
//!
//! assert_eq!(breakdowns.len(), 3);
//! assert_eq!(breakdowns[0].income_tax, dec!(48000));
//! assert_eq!(breakdowns[0].net_income, dec!(113025));
//! ```

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::current_calendar_year;
use crate::calculations::jurisdictions::{TaxComponents, profile};
use crate::models::{
    EmploymentInterval, Jurisdiction, OverrideMap, UnknownJurisdiction, YearOverride,
    YearlyBreakdown,
};

/// Errors that can occur during a projection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectionError {
    #[error(transparent)]
    UnknownJurisdiction(#[from] UnknownJurisdiction),
}

/// Income and employers accumulated for one calendar year.
#[derive(Debug, Default)]
struct YearAccumulator {
    gross_income: Decimal,
    companies: BTreeSet<String>,
}

/// Stateless projector for one jurisdiction.
///
/// Holds no data between calls. Unless pinned with [`ProjectionEngine::as_of`],
/// the evaluation year is read from the clock on every computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionEngine {
    jurisdiction: Jurisdiction,
    evaluation_year: Option<i32>,
}

impl ProjectionEngine {
    pub fn new(jurisdiction: Jurisdiction) -> Self {
        Self {
            jurisdiction,
            evaluation_year: None,
        }
    }

    /// Creates an engine from a jurisdiction code such as `"US"`.
    ///
    /// # Errors
    ///
    /// [`ProjectionError::UnknownJurisdiction`] if the code is not supported.
    pub fn for_code(code: &str) -> Result<Self, ProjectionError> {
        Ok(Self::new(code.parse()?))
    }

    /// Pins the year that ongoing intervals are resolved to.
    pub fn as_of(
        mut self,
        year: i32,
    ) -> Self {
        self.evaluation_year = Some(year);
        self
    }

    pub fn jurisdiction(&self) -> Jurisdiction {
        self.jurisdiction
    }

    /// The year ongoing intervals currently resolve to.
    pub fn evaluation_year(&self) -> i32 {
        self.evaluation_year
            .unwrap_or_else(current_calendar_year)
    }

    /// Produces one breakdown per covered year, ascending.
    ///
    /// Overlapping intervals are summed before tax is applied. An empty
    /// interval set yields an empty result.
    pub fn compute_yearly_breakdowns(
        &self,
        intervals: &[EmploymentInterval],
        overrides: &OverrideMap,
    ) -> Vec<YearlyBreakdown> {
        let current_year = self.evaluation_year();
        let years = self.accumulate(intervals, current_year);

        debug!(
            jurisdiction = %self.jurisdiction,
            intervals = intervals.len(),
            years = years.len(),
            current_year,
            "computing yearly breakdowns"
        );

        years
            .into_iter()
            .map(|(year, accumulated)| {
                self.breakdown_for_year(year, accumulated, overrides.get(year))
            })
            .collect()
    }

    fn accumulate(
        &self,
        intervals: &[EmploymentInterval],
        current_year: i32,
    ) -> BTreeMap<i32, YearAccumulator> {
        let mut years: BTreeMap<i32, YearAccumulator> = BTreeMap::new();

        for interval in intervals {
            for year in interval.years(current_year) {
                let entry = years.entry(year).or_default();
                entry.gross_income = entry
                    .gross_income
                    .saturating_add(interval.annual_gross_income);
                entry.companies.insert(interval.company.clone());
            }
        }

        years
    }

    fn breakdown_for_year(
        &self,
        year: i32,
        accumulated: YearAccumulator,
        pinned: Option<&YearOverride>,
    ) -> YearlyBreakdown {
        let pinned = pinned.copied().unwrap_or_default();

        let gross_income = pinned.gross_income.unwrap_or(accumulated.gross_income);
        let computed: TaxComponents = profile(self.jurisdiction).tax(gross_income, year);

        let income_tax = pinned.income_tax.unwrap_or(computed.income_tax);
        let social_contributions = pinned
            .social_contributions
            .unwrap_or(computed.social_contributions);
        let deductions = pinned.deductions.unwrap_or(computed.deductions);

        if !pinned.is_empty() {
            debug!(year, ?pinned, "applied pinned override");
        }

        YearlyBreakdown {
            year,
            gross_income,
            income_tax,
            social_contributions,
            deductions,
            net_income: YearlyBreakdown::derive_net_income(
                gross_income,
                income_tax,
                social_contributions,
                deductions,
            ),
            companies: accumulated.companies,
        }
    }
}

/// Projects `intervals` under the jurisdiction named by `jurisdiction_code`,
/// evaluated against the current calendar year.
///
/// # Errors
///
/// [`ProjectionError::UnknownJurisdiction`] if the code is not supported; no
/// partial result is produced.
pub fn compute_yearly_breakdowns(
    intervals: &[EmploymentInterval],
    jurisdiction_code: &str,
    overrides: &OverrideMap,
) -> Result<Vec<YearlyBreakdown>, ProjectionError> {
    let engine = ProjectionEngine::for_code(jurisdiction_code)?;
    Ok(engine.compute_yearly_breakdowns(intervals, overrides))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn us_engine() -> ProjectionEngine {
        ProjectionEngine::new(Jurisdiction::UnitedStates).as_of(2025)
    }

    fn acme() -> EmploymentInterval {
        EmploymentInterval::new("Acme", "Engineer", 2020, Some(2022), dec!(150000))
    }

    #[test]
    fn us_scenario_produces_three_identical_years() {
        let breakdowns = us_engine().compute_yearly_breakdowns(&[acme()], &OverrideMap::new());

        assert_eq!(
            breakdowns.iter().map(|b| b.year).collect::<Vec<_>>(),
            vec![2020, 2021, 2022]
        );
        for breakdown in &breakdowns {
            assert_eq!(breakdown.gross_income, dec!(150000));
            assert_eq!(breakdown.income_tax, dec!(48000));
            assert_eq!(breakdown.social_contributions, dec!(11475));
            assert_eq!(breakdown.deductions, dec!(22500));
            assert_eq!(breakdown.net_income, dec!(113025));
            assert_eq!(breakdown.companies, BTreeSet::from(["Acme".to_string()]));
        }
    }

    #[test]
    fn empty_intervals_yield_empty_result() {
        let breakdowns = us_engine().compute_yearly_breakdowns(&[], &OverrideMap::new());

        assert!(breakdowns.is_empty());
    }

    #[test]
    fn unknown_jurisdiction_fails() {
        let result = compute_yearly_breakdowns(&[acme()], "XX", &OverrideMap::new());

        assert_eq!(
            result,
            Err(ProjectionError::UnknownJurisdiction(UnknownJurisdiction(
                "XX".to_string()
            )))
        );
    }

    #[test]
    fn known_code_computes() {
        let breakdowns = compute_yearly_breakdowns(&[acme()], "us", &OverrideMap::new()).unwrap();

        assert_eq!(breakdowns.len(), 3);
    }

    #[test]
    fn concurrent_roles_are_taxed_on_combined_income() {
        let intervals = [
            EmploymentInterval::new("Acme", "Engineer", 2021, Some(2021), dec!(100000)),
            EmploymentInterval::new("Globex", "Advisor", 2021, Some(2021), dec!(50000)),
        ];

        let breakdowns = us_engine().compute_yearly_breakdowns(&intervals, &OverrideMap::new());

        assert_eq!(breakdowns.len(), 1);
        let year = &breakdowns[0];
        assert_eq!(year.gross_income, dec!(150000));
        // Combined income reaches the 24% band; taxed separately the two
        // roles would have paid 32000 + 15000.
        assert_eq!(year.income_tax, dec!(48000));
        assert_eq!(
            year.companies,
            BTreeSet::from(["Acme".to_string(), "Globex".to_string()])
        );
    }

    #[test]
    fn consecutive_roles_each_own_their_years() {
        let intervals = [
            EmploymentInterval::new("Acme", "Engineer", 2016, Some(2018), dec!(90000)),
            EmploymentInterval::new("Globex", "Lead", 2019, Some(2020), dec!(130000)),
        ];

        let breakdowns = us_engine().compute_yearly_breakdowns(&intervals, &OverrideMap::new());

        let incomes: Vec<_> = breakdowns.iter().map(|b| (b.year, b.gross_income)).collect();
        assert_eq!(
            incomes,
            vec![
                (2016, dec!(90000)),
                (2017, dec!(90000)),
                (2018, dec!(90000)),
                (2019, dec!(130000)),
                (2020, dec!(130000)),
            ]
        );
    }

    #[test]
    fn employment_gaps_are_not_filled() {
        let intervals = [
            EmploymentInterval::new("Acme", "Engineer", 2010, Some(2011), dec!(80000)),
            EmploymentInterval::new("Globex", "Lead", 2014, Some(2014), dec!(120000)),
        ];

        let years: Vec<_> = us_engine()
            .compute_yearly_breakdowns(&intervals, &OverrideMap::new())
            .into_iter()
            .map(|b| b.year)
            .collect();

        assert_eq!(years, vec![2010, 2011, 2014]);
    }

    #[test]
    fn output_is_sorted_regardless_of_input_order() {
        let intervals = [
            EmploymentInterval::new("Globex", "Lead", 2022, Some(2023), dec!(120000)),
            EmploymentInterval::new("Acme", "Engineer", 2015, Some(2016), dec!(80000)),
        ];

        let years: Vec<_> = us_engine()
            .compute_yearly_breakdowns(&intervals, &OverrideMap::new())
            .into_iter()
            .map(|b| b.year)
            .collect();

        assert_eq!(years, vec![2015, 2016, 2022, 2023]);
    }

    #[test]
    fn ongoing_interval_expands_through_evaluation_year() {
        let intervals = [EmploymentInterval::new("Acme", "Engineer", 2023, None, dec!(100000))];
        let engine = ProjectionEngine::new(Jurisdiction::UnitedStates);

        let in_2025 = engine.as_of(2025).compute_yearly_breakdowns(&intervals, &OverrideMap::new());
        let in_2027 = engine.as_of(2027).compute_yearly_breakdowns(&intervals, &OverrideMap::new());

        assert_eq!(in_2025.last().map(|b| b.year), Some(2025));
        assert_eq!(in_2025.len(), 3);
        assert_eq!(in_2027.last().map(|b| b.year), Some(2027));
        assert_eq!(in_2027.len(), 5);
    }

    #[test]
    fn unpinned_engine_uses_the_clock() {
        let intervals = [EmploymentInterval::new("Acme", "Engineer", 2020, None, dec!(100000))];
        let engine = ProjectionEngine::new(Jurisdiction::UnitedStates);

        let last = engine
            .compute_yearly_breakdowns(&intervals, &OverrideMap::new())
            .last()
            .map(|b| b.year);

        assert_eq!(last, Some(current_calendar_year()));
    }

    #[test]
    fn computation_is_idempotent() {
        let intervals = [
            acme(),
            EmploymentInterval::new("Globex", "Advisor", 2021, None, dec!(25000)),
        ];
        let engine = us_engine();

        let first = engine.compute_yearly_breakdowns(&intervals, &OverrideMap::new());
        let second = engine.compute_yearly_breakdowns(&intervals, &OverrideMap::new());

        assert_eq!(first, second);
    }

    #[test]
    fn pinned_field_survives_income_change() {
        let mut overrides = OverrideMap::new();
        overrides.pin(
            2021,
            YearOverride {
                income_tax: Some(dec!(40000)),
                ..Default::default()
            },
        );
        let engine = us_engine();

        let before = engine.compute_yearly_breakdowns(&[acme()], &overrides);
        let raised = EmploymentInterval {
            annual_gross_income: dec!(200000),
            ..acme()
        };
        let after = engine.compute_yearly_breakdowns(&[raised], &overrides);

        let before_2021 = before.iter().find(|b| b.year == 2021).unwrap();
        let after_2021 = after.iter().find(|b| b.year == 2021).unwrap();

        assert_eq!(before_2021.income_tax, dec!(40000));
        assert_eq!(after_2021.income_tax, dec!(40000));
        assert_eq!(after_2021.gross_income, dec!(200000));
        // 9932.4 social security + 2900 Medicare; net = 200000 - 40000 - 12832 + 30000
        assert_eq!(after_2021.social_contributions, dec!(12832));
        assert_eq!(after_2021.net_income, dec!(177168));

        // Unpinned years keep computing normally.
        let after_2020 = after.iter().find(|b| b.year == 2020).unwrap();
        assert_eq!(after_2020.income_tax, dec!(80000));
    }

    #[test]
    fn pinned_gross_income_feeds_the_tax_function() {
        let overrides: OverrideMap = [(
            2022,
            YearOverride {
                gross_income: Some(dec!(100000)),
                ..Default::default()
            },
        )]
        .into_iter()
        .collect();

        let breakdowns = us_engine().compute_yearly_breakdowns(&[acme()], &overrides);
        let pinned_year = breakdowns.iter().find(|b| b.year == 2022).unwrap();

        assert_eq!(pinned_year.gross_income, dec!(100000));
        assert_eq!(pinned_year.income_tax, dec!(32000));
        assert_eq!(pinned_year.deductions, dec!(15000));
    }

    #[test]
    fn overrides_for_uncovered_years_are_ignored() {
        let overrides: OverrideMap = [(
            1999,
            YearOverride {
                income_tax: Some(dec!(1)),
                ..Default::default()
            },
        )]
        .into_iter()
        .collect();

        let breakdowns = us_engine().compute_yearly_breakdowns(&[acme()], &overrides);

        assert_eq!(breakdowns.len(), 3);
        assert!(breakdowns.iter().all(|b| b.year != 1999));
    }

    #[test]
    fn net_income_invariant_holds_for_every_jurisdiction() {
        let intervals = [
            EmploymentInterval::new("Acme", "Engineer", 2019, Some(2021), dec!(85000.50)),
            EmploymentInterval::new("Globex", "Advisor", 2020, None, dec!(42000)),
        ];

        for jurisdiction in Jurisdiction::ALL {
            let engine = ProjectionEngine::new(jurisdiction).as_of(2024);
            for b in engine.compute_yearly_breakdowns(&intervals, &OverrideMap::new()) {
                assert_eq!(
                    b.net_income,
                    b.gross_income - b.income_tax - b.social_contributions + b.deductions,
                    "{jurisdiction} {}",
                    b.year
                );
                assert!(b.income_tax >= Decimal::ZERO);
                assert!(b.social_contributions >= Decimal::ZERO);
            }
        }
    }

    #[test]
    fn concurrent_huge_incomes_saturate_instead_of_overflowing() {
        let huge = Decimal::from_i128_with_scale(50_000_000_000_000_000_000_000_000_000, 0);
        let intervals = [
            EmploymentInterval::new("Acme", "Founder", 2020, Some(2020), huge),
            EmploymentInterval::new("Globex", "Founder", 2020, Some(2020), huge),
        ];

        for jurisdiction in Jurisdiction::ALL {
            let engine = ProjectionEngine::new(jurisdiction).as_of(2024);

            let breakdowns = engine.compute_yearly_breakdowns(&intervals, &OverrideMap::new());

            assert_eq!(breakdowns.len(), 1, "{jurisdiction}");
            assert_eq!(breakdowns[0].gross_income, Decimal::MAX, "{jurisdiction}");
            assert!(breakdowns[0].income_tax > Decimal::ZERO, "{jurisdiction}");
            assert!(breakdowns[0].net_income > Decimal::ZERO, "{jurisdiction}");
        }
    }

    #[test]
    fn hong_kong_scenario() {
        let intervals = [EmploymentInterval::new("HSBC", "Director", 2023, Some(2023), dec!(1000000))];
        let engine = ProjectionEngine::new(Jurisdiction::HongKong).as_of(2025);

        let breakdowns = engine.compute_yearly_breakdowns(&intervals, &OverrideMap::new());

        assert_eq!(breakdowns.len(), 1);
        assert_eq!(breakdowns[0].income_tax, dec!(166000));
        assert_eq!(breakdowns[0].social_contributions, dec!(49645));
        assert_eq!(breakdowns[0].deductions, dec!(132000));
    }
}
