//! Words as returned by the lookup service and as shown to the user

use serde::{Deserialize, Serialize};

/// One hit from the lookup service, before client-side re-validation
///
/// Wire form: `{ "word": "zebra", "defs": ["n\tany of several fleet ..."] }`.
/// Any other fields the service sends (scores, tags) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateWord {
    #[serde(rename = "word")]
    pub text: String,
    /// Definitions are requested but not displayed
    #[serde(rename = "defs", default, skip_serializing_if = "Option::is_none")]
    pub definitions: Option<Vec<String>>,
}

impl CandidateWord {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            definitions: None,
        }
    }
}

/// Ordered uppercase words that satisfied every constraint
///
/// Order is the lookup service's order; nothing is sorted or de-duplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilteredResult {
    words: Vec<String>,
}

impl FilteredResult {
    #[must_use]
    pub const fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }
}

impl IntoIterator for FilteredResult {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}
