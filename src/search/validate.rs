//! Input validation
//!
//! Runs before any request is built. A failure here means nothing is sent.

use crate::core::SearchConstraints;
use crate::error::SearchError;

/// Check that the constraints describe a bounded, consistent search
///
/// # Errors
/// - `SearchError::EmptyCriteria` if required letters, pattern and length are all
///   absent (exclusions alone would ask the service for everything)
/// - `SearchError::LengthMismatch` if a pattern and a length are both given and
///   the pattern has a different number of positions
pub fn validate(constraints: &SearchConstraints) -> Result<(), SearchError> {
    if constraints.lacks_criteria() {
        return Err(SearchError::EmptyCriteria);
    }

    if let (Some(pattern), Some(length)) = (&constraints.pattern, constraints.length)
        && pattern.len() != length
    {
        return Err(SearchError::LengthMismatch {
            pattern: pattern.len(),
            length,
        });
    }

    Ok(())
}
