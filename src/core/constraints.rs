//! Search constraints entered by the user
//!
//! Parsing here only checks that each field is well-formed on its own. Whether the
//! fields make sense together (at least one criterion, pattern length equal to
//! the requested length) is decided by `search::validate`.

use super::{LetterSet, Pattern};
use thiserror::Error;

/// Smallest accepted exact length
pub const MIN_LENGTH: usize = 1;

/// Largest accepted exact length
pub const MAX_LENGTH: usize = 15;

/// Error for a malformed input field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("'{0}' is not a letter")]
    InvalidLetter(char),
    #[error("pattern may only contain letters and '?', found '{0}'")]
    InvalidPatternChar(char),
    #[error("pattern must not be empty")]
    EmptyPattern,
    #[error("length must be a number between 1 and 15, got '{0}'")]
    InvalidLength(String),
}

/// The four independent user constraints of one search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConstraints {
    /// Letters that must all appear somewhere in the word
    pub required: LetterSet,
    /// Letters that must not appear anywhere in the word
    pub excluded: LetterSet,
    /// Exact word length
    pub length: Option<usize>,
    /// Letters fixed at given positions
    pub pattern: Option<Pattern>,
}

impl SearchConstraints {
    /// Parse constraints from the raw text of the four form fields
    ///
    /// A blank field means the constraint is absent.
    ///
    /// # Errors
    /// Returns the first `ConstraintError` found, checking fields in order.
    ///
    /// # Examples
    /// ```
    /// use word_finder::core::SearchConstraints;
    ///
    /// let constraints = SearchConstraints::from_fields("", "CYT", "5", "??RA?").unwrap();
    /// assert_eq!(constraints.length, Some(5));
    /// assert_eq!(constraints.excluded.to_string(), "cyt");
    /// ```
    pub fn from_fields(
        required: &str,
        excluded: &str,
        length: &str,
        pattern: &str,
    ) -> Result<Self, ConstraintError> {
        let required = LetterSet::parse(required)?;
        let excluded = LetterSet::parse(excluded)?;

        let length = if length.trim().is_empty() {
            None
        } else {
            Some(parse_length(length)?)
        };

        let pattern = if pattern.trim().is_empty() {
            None
        } else {
            Some(Pattern::parse(pattern)?)
        };

        Ok(Self {
            required,
            excluded,
            length,
            pattern,
        })
    }

    #[must_use]
    pub fn with_required(mut self, required: LetterSet) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub fn with_excluded(mut self, excluded: LetterSet) -> Self {
        self.excluded = excluded;
        self
    }

    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// True when no field narrows the search except possibly exclusions
    #[must_use]
    pub fn lacks_criteria(&self) -> bool {
        self.required.is_empty() && self.length.is_none() && self.pattern.is_none()
    }
}

/// Parse an exact length in `MIN_LENGTH..=MAX_LENGTH`
///
/// # Errors
/// Returns `ConstraintError::InvalidLength` for non-numeric or out-of-range input.
pub fn parse_length(input: &str) -> Result<usize, ConstraintError> {
    let trimmed = input.trim();
    trimmed
        .parse::<usize>()
        .ok()
        .filter(|n| (MIN_LENGTH..=MAX_LENGTH).contains(n))
        .ok_or_else(|| ConstraintError::InvalidLength(trimmed.to_string()))
}
