//! Contracts with the document-analysis collaborators.
//!
//! Turning free text into employment records is delegated to an external
//! language-model service behind [`DocumentAnalyzer`]. When that service
//! reports an exhausted quota or a rate limit, callers fall back to a local
//! [`FallbackExtractor`]; every other failure is surfaced verbatim.

mod document;
mod error;
mod fallback;

pub use document::{DocumentAnalysis, ExtractedEmployment, parse_analysis_response};
pub use error::AnalysisError;
pub use fallback::{AnalysisOutcome, DocumentAnalyzer, FallbackExtractor, analyze_with_fallback};
