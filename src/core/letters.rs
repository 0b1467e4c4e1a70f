//! Letter sets for inclusion/exclusion constraints
//!
//! A `LetterSet` keeps the order in which letters were entered so that anything
//! derived from it (such as the exclusion query term) is stable.

use super::ConstraintError;
use std::fmt;
use std::str::FromStr;

/// Insertion-ordered, de-duplicated set of lowercase ASCII letters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterSet {
    letters: Vec<char>,
}

impl LetterSet {
    /// Create an empty set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            letters: Vec::new(),
        }
    }

    /// Parse letters from free text
    ///
    /// Letters are lower-cased and repeated letters are dropped. Whitespace and
    /// commas are treated as separators and ignored.
    ///
    /// # Errors
    /// Returns `ConstraintError::InvalidLetter` for any other non-letter character.
    ///
    /// # Examples
    /// ```
    /// use word_finder::core::LetterSet;
    ///
    /// let set = LetterSet::parse("C, y t c").unwrap();
    /// assert_eq!(set.to_string(), "cyt");
    /// assert!(LetterSet::parse("a1").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ConstraintError> {
        let mut set = Self::new();
        for ch in input.chars() {
            if ch.is_whitespace() || ch == ',' {
                continue;
            }
            if !ch.is_ascii_alphabetic() {
                return Err(ConstraintError::InvalidLetter(ch));
            }
            set.insert(ch);
        }
        Ok(set)
    }

    /// Add a letter, ignoring case and duplicates
    ///
    /// Returns `true` if the letter was not already present.
    pub fn insert(&mut self, letter: char) -> bool {
        let letter = letter.to_ascii_lowercase();
        if self.letters.contains(&letter) {
            return false;
        }
        self.letters.push(letter);
        true
    }

    /// Check membership (case-insensitive)
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter.to_ascii_lowercase())
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Iterate letters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }
}

impl FromStr for LetterSet {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lowercases_and_dedupes() {
        let set = LetterSet::parse("AuLa").unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!['a', 'u', 'l']);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn parse_keeps_entry_order() {
        let set = LetterSet::parse("CYT").unwrap();
        assert_eq!(set.to_string(), "cyt");
    }

    #[test]
    fn parse_ignores_separators() {
        let set = LetterSet::parse(" a, b  c ").unwrap();
        assert_eq!(set.to_string(), "abc");
    }

    #[test]
    fn parse_empty_is_empty_set() {
        assert!(LetterSet::parse("").unwrap().is_empty());
        assert!(LetterSet::parse("  ").unwrap().is_empty());
    }

    #[test]
    fn parse_rejects_non_letters() {
        assert_eq!(
            LetterSet::parse("ab3"),
            Err(ConstraintError::InvalidLetter('3'))
        );
        assert!(LetterSet::parse("a?").is_err());
        assert!(LetterSet::parse("é").is_err());
    }

    #[test]
    fn contains_is_case_insensitive() {
        let set = LetterSet::parse("xq").unwrap();
        assert!(set.contains('X'));
        assert!(set.contains('q'));
        assert!(!set.contains('a'));
    }

    #[test]
    fn insert_reports_novelty() {
        let mut set = LetterSet::new();
        assert!(set.insert('A'));
        assert!(!set.insert('a'));
        assert_eq!(set.len(), 1);
    }
}
