use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static QUOTA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)quota[_\s-]?exceeded|exceeded.*quota|current\s+quota")
        .expect("quota pattern is valid")
});

static RATE_LIMIT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)rate[_\s-]?limit|rate.*exceeded").expect("rate-limit pattern is valid")
});

static AUTH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)invalid[_\s-]?api|authentication").expect("auth pattern is valid")
});

/// Failures reported by a [`super::DocumentAnalyzer`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("analysis quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("analysis rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("analysis service rejected credentials: {0}")]
    Authentication(String),

    #[error("failed to parse analysis result: {0}")]
    MalformedResponse(String),

    #[error("analysis failed: {0}")]
    Service(String),
}

impl AnalysisError {
    /// Maps a raw service error message to a variant.
    ///
    /// Quota is checked before rate limiting, which is checked before
    /// authentication; anything unrecognised is [`AnalysisError::Service`].
    pub fn classify(message: impl Into<String>) -> Self {
        let message = message.into();

        if QUOTA_PATTERN.is_match(&message)
            || (message.contains("429") && message.to_lowercase().contains("quota"))
        {
            Self::QuotaExceeded(message)
        } else if RATE_LIMIT_PATTERN.is_match(&message) {
            Self::RateLimited(message)
        } else if AUTH_PATTERN.is_match(&message) {
            Self::Authentication(message)
        } else {
            Self::Service(message)
        }
    }

    /// Whether the local fallback extractor should take over.
    pub fn should_fall_back(&self) -> bool {
        matches!(self, Self::QuotaExceeded(_) | Self::RateLimited(_))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn classifies_quota_messages() {
        for message in [
            "RESOURCE_EXHAUSTED: Quota exceeded for metric",
            "You exceeded your current quota, please check your plan",
            "quota_exceeded",
            "HTTP 429: daily quota reached",
        ] {
            let err = AnalysisError::classify(message);
            assert!(matches!(err, AnalysisError::QuotaExceeded(_)), "{message}");
            assert!(err.should_fall_back());
        }
    }

    #[test]
    fn classifies_rate_limits() {
        let err = AnalysisError::classify("Rate limit reached for requests");

        assert_eq!(
            err,
            AnalysisError::RateLimited("Rate limit reached for requests".to_string())
        );
        assert!(err.should_fall_back());
    }

    #[test]
    fn classifies_authentication_failures() {
        let err = AnalysisError::classify("API key not valid: INVALID_API_KEY");

        assert!(matches!(err, AnalysisError::Authentication(_)));
        assert!(!err.should_fall_back());
    }

    #[test]
    fn everything_else_is_a_service_error() {
        let err = AnalysisError::classify("upstream connect error");

        assert_eq!(err, AnalysisError::Service("upstream connect error".to_string()));
        assert!(!err.should_fall_back());
    }
}
