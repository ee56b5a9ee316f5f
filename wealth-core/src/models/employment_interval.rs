use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Earliest start year accepted by [`EmploymentInterval::validate`].
pub const EARLIEST_START_YEAR: i32 = 1950;

/// Reasons an interval is rejected before it reaches the projection engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error("start year {start_year} is after end year {end_year}")]
    StartAfterEnd { start_year: i32, end_year: i32 },

    #[error("start year {0} is before {EARLIEST_START_YEAR}")]
    StartTooEarly(i32),

    #[error("start year {start_year} is after the current year {current_year}")]
    StartInFuture { start_year: i32, current_year: i32 },

    #[error("annual gross income {0} is negative")]
    NegativeIncome(Decimal),
}

/// One continuous period of income at a single annual figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentInterval {
    pub company: String,
    pub position: String,
    pub start_year: i32,
    /// `None` while the position is ongoing.
    pub end_year: Option<i32>,
    pub annual_gross_income: Decimal,
}

impl EmploymentInterval {
    pub fn new(
        company: impl Into<String>,
        position: impl Into<String>,
        start_year: i32,
        end_year: Option<i32>,
        annual_gross_income: Decimal,
    ) -> Self {
        Self {
            company: company.into(),
            position: position.into(),
            start_year,
            end_year,
            annual_gross_income,
        }
    }

    pub fn is_ongoing(&self) -> bool {
        self.end_year.is_none()
    }

    /// Last calendar year covered, resolving an ongoing interval to `current_year`.
    pub fn effective_end_year(
        &self,
        current_year: i32,
    ) -> i32 {
        self.end_year.unwrap_or(current_year)
    }

    /// Inclusive calendar years this interval contributes income to.
    ///
    /// Empty when the interval is malformed (start after end).
    pub fn years(
        &self,
        current_year: i32,
    ) -> std::ops::RangeInclusive<i32> {
        self.start_year..=self.effective_end_year(current_year)
    }

    /// Checks the interval invariants against the given current year.
    pub fn validate(
        &self,
        current_year: i32,
    ) -> Result<(), IntervalError> {
        if self.start_year < EARLIEST_START_YEAR {
            return Err(IntervalError::StartTooEarly(self.start_year));
        }
        if self.start_year > current_year {
            return Err(IntervalError::StartInFuture {
                start_year: self.start_year,
                current_year,
            });
        }
        if let Some(end_year) = self.end_year {
            if self.start_year > end_year {
                return Err(IntervalError::StartAfterEnd {
                    start_year: self.start_year,
                    end_year,
                });
            }
        }
        if self.annual_gross_income < Decimal::ZERO {
            return Err(IntervalError::NegativeIncome(self.annual_gross_income));
        }
        Ok(())
    }
}
