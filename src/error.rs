//! Search failures
//!
//! Every variant ends the current search attempt. Nothing is retried
//! automatically; the user resubmits.

use thiserror::Error;

/// Why a search did not produce a result
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// No required letters, pattern or length given
    #[error("Please enter at least one of: letters to include, a length, or a pattern")]
    EmptyCriteria,

    /// Pattern and exact length disagree
    #[error("Pattern length ({pattern}) does not match the requested length ({length})")]
    LengthMismatch { pattern: usize, length: usize },

    /// The lookup service answered 429
    #[error("Rate limit exceeded. Please wait a moment and try again")]
    RateLimited,

    /// Any other transport, status or decoding failure
    #[error("Failed to fetch words")]
    FetchFailed { reason: String },
}

impl SearchError {
    pub fn fetch_failed(reason: impl ToString) -> Self {
        Self::FetchFailed {
            reason: reason.to_string(),
        }
    }

    /// Validation failures are detected locally, before any request
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyCriteria | Self::LengthMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_classification() {
        assert!(SearchError::EmptyCriteria.is_validation());
        assert!(
            SearchError::LengthMismatch {
                pattern: 4,
                length: 5
            }
            .is_validation()
        );
        assert!(!SearchError::RateLimited.is_validation());
        assert!(!SearchError::fetch_failed("timeout").is_validation());
    }

    #[test]
    fn fetch_failure_message_is_generic() {
        let err = SearchError::fetch_failed("connection reset by peer");
        assert_eq!(err.to_string(), "Failed to fetch words");
    }

    #[test]
    fn mismatch_message_names_both_lengths() {
        let err = SearchError::LengthMismatch {
            pattern: 4,
            length: 5,
        };
        let text = err.to_string();
        assert!(text.contains('4'));
        assert!(text.contains('5'));
    }
}
