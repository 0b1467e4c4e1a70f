//! Query construction
//!
//! Turns `SearchConstraints` into the parameters of one lookup request:
//! - `sp`: positional pattern, `?` for unknown letters
//! - `q`: one `-x` term per excluded letter, space-separated
//! - `max`: result cap
//! - `md=d`: ask for definitions alongside each word
//!
//! Required letters are not transmitted. They are enforced by the result filter.

use crate::core::{LetterSet, Pattern, SearchConstraints};

/// Result cap sent with every request
pub const MAX_RESULTS: usize = 200;

/// Pattern used when neither a pattern nor a length is known
pub const ANY_WORD: &str = "*";

/// Metadata flag requesting definitions
const DEFINITIONS_FLAG: &str = "d";

/// Outbound lookup parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub pattern: String,
    pub exclusion: Option<String>,
    pub max_results: usize,
    pub include_definitions: bool,
}

impl LookupRequest {
    /// Query string pairs in wire order
    ///
    /// `q` is omitted when there are no exclusions and `md` when definitions are
    /// not requested.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("sp", self.pattern.clone())];
        if let Some(exclusion) = &self.exclusion {
            pairs.push(("q", exclusion.clone()));
        }
        pairs.push(("max", self.max_results.to_string()));
        if self.include_definitions {
            pairs.push(("md", DEFINITIONS_FLAG.to_string()));
        }
        pairs
    }
}

/// Build the lookup request for a set of constraints
///
/// Deterministic and side-effect free. An explicit pattern wins; otherwise an
/// exact length becomes that many wildcards; otherwise the request matches any
/// word and relies on the filter.
///
/// # Examples
/// ```
/// use word_finder::core::SearchConstraints;
/// use word_finder::search::build_request;
///
/// let constraints = SearchConstraints::from_fields("", "CYT", "5", "").unwrap();
/// let request = build_request(&constraints);
/// assert_eq!(request.pattern, "?????");
/// assert_eq!(request.exclusion.as_deref(), Some("-c -y -t"));
/// ```
#[must_use]
pub fn build_request(constraints: &SearchConstraints) -> LookupRequest {
    let pattern = match (&constraints.pattern, constraints.length) {
        (Some(pattern), _) => pattern.as_str().to_string(),
        (None, Some(length)) => Pattern::wildcards(length).as_str().to_string(),
        (None, None) => ANY_WORD.to_string(),
    };

    LookupRequest {
        pattern,
        exclusion: exclusion_term(&constraints.excluded),
        max_results: MAX_RESULTS,
        include_definitions: true,
    }
}

/// Encode excluded letters as negated-letter terms, in entry order
#[must_use]
pub fn exclusion_term(excluded: &LetterSet) -> Option<String> {
    if excluded.is_empty() {
        return None;
    }

    let terms: Vec<String> = excluded.iter().map(|letter| format!("-{letter}")).collect();
    Some(terms.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(required: &str, excluded: &str, length: &str, pattern: &str) -> SearchConstraints {
        SearchConstraints::from_fields(required, excluded, length, pattern).unwrap()
    }

    #[test]
    fn length_without_pattern_becomes_wildcards() {
        let request = build_request(&fields("", "", "5", ""));
        assert_eq!(request.pattern, "?????");
    }

    #[test]
    fn explicit_pattern_is_lowercased() {
        let request = build_request(&fields("", "", "", "??RA?"));
        assert_eq!(request.pattern, "??ra?");
    }

    #[test]
    fn required_only_matches_any_word() {
        let request = build_request(&fields("aul", "", "", ""));
        assert_eq!(request.pattern, ANY_WORD);
        assert_eq!(request.exclusion, None);
    }

    #[test]
    fn exclusion_terms_are_stable_and_lowercase() {
        let request = build_request(&fields("", "CYT", "5", ""));
        assert_eq!(request.exclusion.as_deref(), Some("-c -y -t"));
    }

    #[test]
    fn always_capped_with_definitions() {
        let request = build_request(&fields("e", "", "", ""));
        assert_eq!(request.max_results, 200);
        assert!(request.include_definitions);
    }

    #[test]
    fn query_pairs_full() {
        let request = build_request(&fields("", "CYT", "5", "??RA?"));
        assert_eq!(
            request.query_pairs(),
            vec![
                ("sp", "??ra?".to_string()),
                ("q", "-c -y -t".to_string()),
                ("max", "200".to_string()),
                ("md", "d".to_string()),
            ]
        );
    }

    #[test]
    fn query_pairs_without_exclusions_omit_q() {
        let request = build_request(&fields("", "", "3", ""));
        let keys: Vec<&str> = request.query_pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["sp", "max", "md"]);
    }

    #[test]
    fn builder_is_deterministic() {
        let constraints = fields("ab", "xyz", "4", "a???");
        assert_eq!(build_request(&constraints), build_request(&constraints));
    }
}
