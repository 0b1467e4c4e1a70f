//! Positional word patterns
//!
//! A pattern is a fixed-length sequence of slots. Each slot is either a literal
//! letter or the wildcard `?`, which matches any single letter:
//! - `??ra?` describes CORAL, MORAL, MURAL
//! - `?????` matches every five-letter word

use super::ConstraintError;
use std::fmt;
use std::str::FromStr;

/// Placeholder matching any single letter
pub const WILDCARD: char = '?';

/// Fixed-length positional pattern over `a-z` and [`WILDCARD`]
///
/// Literal letters are stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    text: String,
}

impl Pattern {
    /// Parse a pattern from user input
    ///
    /// # Errors
    /// Returns `ConstraintError::EmptyPattern` for an empty string, or
    /// `ConstraintError::InvalidPatternChar` if a character is neither an ASCII
    /// letter nor the wildcard.
    ///
    /// # Examples
    /// ```
    /// use word_finder::core::Pattern;
    ///
    /// let pattern = Pattern::parse("??RA?").unwrap();
    /// assert_eq!(pattern.as_str(), "??ra?");
    /// assert_eq!(pattern.len(), 5);
    /// ```
    pub fn parse(input: &str) -> Result<Self, ConstraintError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ConstraintError::EmptyPattern);
        }

        if let Some(bad) = trimmed
            .chars()
            .find(|&c| c != WILDCARD && !c.is_ascii_alphabetic())
        {
            return Err(ConstraintError::InvalidPatternChar(bad));
        }

        Ok(Self {
            text: trimmed.to_ascii_lowercase(),
        })
    }

    /// A pattern of `len` wildcards
    #[must_use]
    pub fn wildcards(len: usize) -> Self {
        Self {
            text: WILDCARD.to_string().repeat(len),
        }
    }

    /// Number of positions (every slot is one ASCII byte)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Lowercase wire form of the pattern
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for Pattern {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lowercases() {
        let pattern = Pattern::parse("??RA?").unwrap();
        assert_eq!(pattern.as_str(), "??ra?");
    }

    #[test]
    fn parse_rejects_bad_characters() {
        assert_eq!(
            Pattern::parse("a*b"),
            Err(ConstraintError::InvalidPatternChar('*'))
        );
        assert_eq!(
            Pattern::parse("a b"),
            Err(ConstraintError::InvalidPatternChar(' '))
        );
        assert_eq!(Pattern::parse(""), Err(ConstraintError::EmptyPattern));
        assert_eq!(Pattern::parse("   "), Err(ConstraintError::EmptyPattern));
    }

    #[test]
    fn wildcards_has_requested_length() {
        let pattern = Pattern::wildcards(5);
        assert_eq!(pattern.as_str(), "?????");
        assert_eq!(pattern.len(), 5);
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        assert_eq!(Pattern::parse(" a?c ").unwrap().as_str(), "a?c");
    }
}
