use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::AnalysisError;
use crate::models::{
    EmploymentInterval, Jurisdiction, NewEmploymentRecord, RecordSource, UnknownJurisdiction,
};

/// Records extracted below this confidence are flagged for review.
const RECORD_REVIEW_THRESHOLD: Decimal = dec!(0.8);

/// Analyses below this overall confidence are logged as needing careful review.
const ANALYSIS_REVIEW_THRESHOLD: Decimal = dec!(0.7);

// Outermost brace-delimited block; the service often wraps JSON in prose or fences.
static JSON_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("JSON block pattern is valid"));

/// One employment position as reported by the analysis service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedEmployment {
    pub company: String,
    pub position: String,
    pub start_year: i32,
    #[serde(default)]
    pub end_year: Option<i32>,
    pub annual_income: Decimal,
    #[serde(default)]
    pub location: Option<String>,
    /// In `[0, 1]`.
    pub confidence: Decimal,
    #[serde(default)]
    pub reasoning: Option<String>,
}

impl ExtractedEmployment {
    pub fn to_interval(&self) -> EmploymentInterval {
        EmploymentInterval::new(
            self.company.clone(),
            self.position.clone(),
            self.start_year,
            self.end_year,
            self.annual_income,
        )
    }

    /// Converts to a store input attributed to `file_name`.
    pub fn into_new_record(
        self,
        file_name: &str,
    ) -> NewEmploymentRecord {
        NewEmploymentRecord {
            interval: self.to_interval(),
            source: RecordSource::Document {
                file_name: file_name.to_string(),
            },
            needs_review: self.confidence < RECORD_REVIEW_THRESHOLD,
            confidence: Some(self.confidence),
            reasoning: self.reasoning,
            location: self.location,
        }
    }
}

/// Structured result of analysing one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAnalysis {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub current_role: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Jurisdiction code as reported; see [`DocumentAnalysis::jurisdiction`].
    #[serde(default, rename = "jurisdiction")]
    pub jurisdiction_code: Option<String>,
    #[serde(default)]
    pub employment_records: Vec<ExtractedEmployment>,
    #[serde(default)]
    pub summary: Option<String>,
    pub confidence_score: Decimal,
}

impl DocumentAnalysis {
    /// The detected jurisdiction, if one was reported.
    pub fn jurisdiction(&self) -> Option<Result<Jurisdiction, UnknownJurisdiction>> {
        self.jurisdiction_code.as_deref().map(str::parse)
    }

    pub fn needs_careful_review(&self) -> bool {
        self.confidence_score < ANALYSIS_REVIEW_THRESHOLD
    }

    /// Converts every extracted position to a store input attributed to `file_name`.
    pub fn into_new_records(
        self,
        file_name: &str,
    ) -> Vec<NewEmploymentRecord> {
        if self.needs_careful_review() {
            warn!(
                file_name,
                confidence = %self.confidence_score,
                "low analysis confidence; review extracted data carefully"
            );
        }

        self.employment_records
            .into_iter()
            .map(|employment| employment.into_new_record(file_name))
            .collect()
    }
}

/// Parses the text returned by the analysis service.
///
/// The outermost `{...}` block is extracted first so that surrounding prose or
/// markdown code fences are tolerated.
///
/// # Errors
///
/// [`AnalysisError::MalformedResponse`] when no JSON object can be decoded.
pub fn parse_analysis_response(text: &str) -> Result<DocumentAnalysis, AnalysisError> {
    let json = JSON_BLOCK
        .find(text)
        .map_or(text, |m| m.as_str());

    serde_json::from_str(json).map_err(|e| AnalysisError::MalformedResponse(e.to_string()))
}
