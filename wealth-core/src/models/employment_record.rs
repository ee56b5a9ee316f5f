use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmploymentInterval;

/// Where an employment record came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordSource {
    Manual,
    LinkedIn,
    Document { file_name: String },
}

/// An interval held by a record store, with its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentRecord {
    pub id: i64,
    pub interval: EmploymentInterval,
    pub source: RecordSource,
    /// Extraction confidence in `[0, 1]`; `None` for manual entries.
    pub confidence: Option<Decimal>,
    pub reasoning: Option<String>,
    pub location: Option<String>,
    pub needs_review: bool,
    pub created_at: DateTime<Utc>,
}

/// For adding new records (no id or timestamp)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmploymentRecord {
    pub interval: EmploymentInterval,
    pub source: RecordSource,
    pub confidence: Option<Decimal>,
    pub reasoning: Option<String>,
    pub location: Option<String>,
    pub needs_review: bool,
}

impl NewEmploymentRecord {
    /// A manually entered record; trusted as-is.
    pub fn manual(interval: EmploymentInterval) -> Self {
        Self {
            interval,
            source: RecordSource::Manual,
            confidence: None,
            reasoning: None,
            location: None,
            needs_review: false,
        }
    }
}

/// Partial update of a stored interval. `None` leaves a field untouched.
///
/// `end_year` is doubly optional so an edit can mark a position as ongoing
/// (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalPatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<Option<i32>>,
    pub annual_gross_income: Option<Decimal>,
}

impl IntervalPatch {
    pub fn is_empty(&self) -> bool {
        self.company.is_none()
            && self.position.is_none()
            && self.start_year.is_none()
            && self.end_year.is_none()
            && self.annual_gross_income.is_none()
    }

    /// Returns a copy of `interval` with the patched fields replaced.
    pub fn applied_to(
        &self,
        interval: &EmploymentInterval,
    ) -> EmploymentInterval {
        EmploymentInterval {
            company: self
                .company
                .clone()
                .unwrap_or_else(|| interval.company.clone()),
            position: self
                .position
                .clone()
                .unwrap_or_else(|| interval.position.clone()),
            start_year: self.start_year.unwrap_or(interval.start_year),
            end_year: self.end_year.unwrap_or(interval.end_year),
            annual_gross_income: self
                .annual_gross_income
                .unwrap_or(interval.annual_gross_income),
        }
    }
}
