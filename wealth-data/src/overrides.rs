//! CSV loader for per-year overrides.
//!
//! Columns: `year` (required) and any of `gross_income`, `income_tax`,
//! `social_contributions`, `deductions`. An empty cell leaves that field
//! computed; a repeated year layers its pinned fields over the earlier row.
//!
//! ```csv
//! year,gross_income,income_tax,social_contributions,deductions
//! 2021,,40000,,
//! 2022,180000,,,
//! ```

use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use wealth_core::{OverrideMap, YearOverride};

use crate::decimal::deserialize_optional_amount;

#[derive(Debug, Error)]
pub enum OverrideLoadError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("override on row {row} for {year} pins no fields")]
    Empty { row: usize, year: i32 },
}

#[derive(Debug, Deserialize)]
struct OverrideRow {
    year: i32,
    #[serde(default, deserialize_with = "deserialize_optional_amount")]
    gross_income: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_amount")]
    income_tax: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_amount")]
    social_contributions: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_amount")]
    deductions: Option<Decimal>,
}

pub struct OverrideCsvLoader;

impl OverrideCsvLoader {
    pub fn load<R: Read>(reader: R) -> Result<OverrideMap, OverrideLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut overrides = OverrideMap::new();
        for (idx, result) in csv_reader.deserialize::<OverrideRow>().enumerate() {
            let row = result?;
            let pinned = YearOverride {
                gross_income: row.gross_income,
                income_tax: row.income_tax,
                social_contributions: row.social_contributions,
                deductions: row.deductions,
            };
            if pinned.is_empty() {
                return Err(OverrideLoadError::Empty {
                    row: idx + 1,
                    year: row.year,
                });
            }
            overrides.pin(row.year, pinned);
        }

        debug!(years = overrides.len(), "loaded overrides");
        Ok(overrides)
    }

    pub fn load_from_str(input: &str) -> Result<OverrideMap, OverrideLoadError> {
        Self::load(input.as_bytes())
    }

    pub fn load_from_file(path: &Path) -> Result<OverrideMap, OverrideLoadError> {
        let file = std::fs::File::open(path).map_err(|source| OverrideLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::load(file)
    }
}
