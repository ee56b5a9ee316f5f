use async_trait::async_trait;
use tracing::{info, warn};

use super::{AnalysisError, DocumentAnalysis, ExtractedEmployment};
use crate::models::NewEmploymentRecord;

/// External service that turns document text into structured employment data.
#[async_trait]
pub trait DocumentAnalyzer: Send + Sync {
    async fn analyze(
        &self,
        content: &str,
        file_name: &str,
    ) -> Result<DocumentAnalysis, AnalysisError>;
}

/// Local pattern-matching extractor used only while the analyzer is unavailable.
pub trait FallbackExtractor: Send + Sync {
    fn extract(
        &self,
        content: &str,
        file_name: &str,
    ) -> Vec<ExtractedEmployment>;
}

/// Records produced for one document, and how they were produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOutcome {
    pub records: Vec<NewEmploymentRecord>,
    /// `None` when the fallback extractor produced the records.
    pub analysis: Option<DocumentAnalysis>,
    pub used_fallback: bool,
}

/// Analyzes a document, falling back to local extraction on quota or rate-limit
/// failures. Fallback records are always flagged for review.
///
/// # Errors
///
/// Any [`AnalysisError`] for which [`AnalysisError::should_fall_back`] is false.
pub async fn analyze_with_fallback<A, F>(
    analyzer: &A,
    extractor: &F,
    content: &str,
    file_name: &str,
) -> Result<AnalysisOutcome, AnalysisError>
where
    A: DocumentAnalyzer + ?Sized,
    F: FallbackExtractor + ?Sized,
{
    match analyzer.analyze(content, file_name).await {
        Ok(analysis) => {
            info!(
                file_name,
                records = analysis.employment_records.len(),
                confidence = %analysis.confidence_score,
                "document analysed"
            );
            Ok(AnalysisOutcome {
                records: analysis.clone().into_new_records(file_name),
                analysis: Some(analysis),
                used_fallback: false,
            })
        }
        Err(err) if err.should_fall_back() => {
            warn!(file_name, error = %err, "analysis unavailable, using local extraction");
            let records = extractor
                .extract(content, file_name)
                .into_iter()
                .map(|employment| {
                    let mut record = employment.into_new_record(file_name);
                    record.needs_review = true;
                    record
                })
                .collect();
            Ok(AnalysisOutcome {
                records,
                analysis: None,
                used_fallback: true,
            })
        }
        Err(err) => Err(err),
    }
}
