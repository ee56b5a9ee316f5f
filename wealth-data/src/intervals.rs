//! CSV loader for employment intervals.
//!
//! ## CSV Format
//!
//! Headers are matched by name; column order does not matter.
//!
//! | Column | Required | Type | Notes |
//! |-----------------------|----------|---------|----------------------------------------|
//! | `company` | yes | string | |
//! | `position` | yes | string | |
//! | `start_year` | yes | integer | e.g. `2019` |
//! | `end_year` | no | integer | Leave empty while the role is ongoing |
//! | `annual_gross_income` | yes | decimal | Thousands separators allowed (quoted) |
//!
//! ### Example
//!
//! ```csv
//! company,position,start_year,end_year,annual_gross_income
//! Acme,Engineer,2016,2019,"95,000"
//! Globex,Director,2020,,210000
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use wealth_core::{EmploymentInterval, IntervalError};

use crate::decimal::{deserialize_amount, deserialize_optional_year};

/// Errors that can occur while loading interval data.
#[derive(Debug, Error)]
pub enum CsvLoadError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Structurally invalid CSV, a missing column or an unparseable cell.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// `row` is 1-based, not counting the header.
    #[error("invalid interval on row {row}: {source}")]
    InvalidInterval {
        row: usize,
        #[source]
        source: IntervalError,
    },
}

#[derive(Debug, Deserialize)]
struct IntervalRow {
    company: String,
    position: String,
    start_year: i32,
    #[serde(default, deserialize_with = "deserialize_optional_year")]
    end_year: Option<i32>,
    #[serde(deserialize_with = "deserialize_amount")]
    annual_gross_income: rust_decimal::Decimal,
}

impl From<IntervalRow> for EmploymentInterval {
    fn from(row: IntervalRow) -> Self {
        EmploymentInterval::new(
            row.company,
            row.position,
            row.start_year,
            row.end_year,
            row.annual_gross_income,
        )
    }
}

/// Reads employment intervals from CSV and validates them before they reach
/// the projection engine.
pub struct IntervalCsvLoader;

impl IntervalCsvLoader {
    /// Parses intervals in file order without validating them.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<EmploymentInterval>, CsvLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(false)
            .from_reader(reader);

        let mut intervals = Vec::new();
        for result in csv_reader.deserialize::<IntervalRow>() {
            intervals.push(result?.into());
        }
        Ok(intervals)
    }

    /// Parses and validates every interval against `current_year`.
    ///
    /// # Errors
    ///
    /// * [`CsvLoadError::Parse`] for malformed CSV.
    /// * [`CsvLoadError::InvalidInterval`] for the first row that breaks an
    ///   interval invariant.
    pub fn load<R: Read>(
        reader: R,
        current_year: i32,
    ) -> Result<Vec<EmploymentInterval>, CsvLoadError> {
        let intervals = Self::parse(reader)?;

        for (idx, interval) in intervals.iter().enumerate() {
            interval
                .validate(current_year)
                .map_err(|source| CsvLoadError::InvalidInterval {
                    row: idx + 1,
                    source,
                })?;
        }

        debug!(count = intervals.len(), "loaded employment intervals");
        Ok(intervals)
    }

    pub fn load_from_str(
        input: &str,
        current_year: i32,
    ) -> Result<Vec<EmploymentInterval>, CsvLoadError> {
        Self::load(input.as_bytes(), current_year)
    }

    pub fn load_from_file(
        path: &Path,
        current_year: i32,
    ) -> Result<Vec<EmploymentInterval>, CsvLoadError> {
        let file = std::fs::File::open(path).map_err(|source| CsvLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::load(file, current_year)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const CSV: &str = "\
company,position,start_year,end_year,annual_gross_income
Acme,Engineer,2016,2019,\"95,000\"
Globex,Director,2020,,210000
";

    #[test]
    fn loads_rows_in_file_order() {
        let intervals = IntervalCsvLoader::load_from_str(CSV, 2025).unwrap();

        assert_eq!(
            intervals,
            vec![
                EmploymentInterval::new("Acme", "Engineer", 2016, Some(2019), dec!(95000)),
                EmploymentInterval::new("Globex", "Director", 2020, None, dec!(210000)),
            ]
        );
    }

    #[test]
    fn column_order_does_not_matter() {
        let csv = "\
annual_gross_income,end_year,start_year,position,company
80000,2012,2010,Analyst,Initech
";

        let intervals = IntervalCsvLoader::load_from_str(csv, 2025).unwrap();

        assert_eq!(intervals[0].company, "Initech");
        assert_eq!(intervals[0].end_year, Some(2012));
    }

    #[test]
    fn invalid_interval_reports_row() {
        let csv = "\
company,position,start_year,end_year,annual_gross_income
Acme,Engineer,2016,2019,95000
Globex,Director,2021,2020,210000
";

        let err = IntervalCsvLoader::load_from_str(csv, 2025).unwrap_err();

        match err {
            CsvLoadError::InvalidInterval { row, source } => {
                assert_eq!(row, 2);
                assert_eq!(
                    source,
                    IntervalError::StartAfterEnd {
                        start_year: 2021,
                        end_year: 2020
                    }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn future_start_is_rejected() {
        let csv = "\
company,position,start_year,end_year,annual_gross_income
Acme,Engineer,2030,,95000
";

        assert!(matches!(
            IntervalCsvLoader::load_from_str(csv, 2025),
            Err(CsvLoadError::InvalidInterval { row: 1, .. })
        ));
    }

    #[test]
    fn unparseable_income_is_a_parse_error() {
        let csv = "\
company,position,start_year,end_year,annual_gross_income
Acme,Engineer,2016,2019,plenty
";

        assert!(matches!(
            IntervalCsvLoader::load_from_str(csv, 2025),
            Err(CsvLoadError::Parse(_))
        ));
    }

    #[test]
    fn parse_skips_validation() {
        let csv = "\
company,position,start_year,end_year,annual_gross_income
Acme,Engineer,2021,2020,95000
";

        assert_eq!(IntervalCsvLoader::parse(csv.as_bytes()).unwrap().len(), 1);
    }
}
