//! Client-side result filtering
//!
//! The lookup service's own matching is approximate, so every candidate is
//! checked again here for length, required letters and excluded letters. The
//! positional pattern is left to the service: it only travels as `sp`.

use crate::core::{CandidateWord, FilteredResult, SearchConstraints};
use rustc_hash::FxHashSet;

/// Keep the candidates that pass [`satisfies`], uppercased, in service order
///
/// An empty outcome is a valid result, not an error.
#[must_use]
pub fn filter_candidates(
    candidates: &[CandidateWord],
    constraints: &SearchConstraints,
) -> FilteredResult {
    filter_words(candidates.iter().map(|c| c.text.as_str()), constraints)
}

/// Filter plain words
///
/// Each word is uppercased once, checked in that form and kept in that form, so
/// filtering an already filtered result with the same constraints returns it
/// unchanged.
#[must_use]
pub fn filter_words<'a, I>(words: I, constraints: &SearchConstraints) -> FilteredResult
where
    I: IntoIterator<Item = &'a str>,
{
    let kept = words
        .into_iter()
        .map(str::to_uppercase)
        .filter(|word| satisfies_uppercase(word, constraints))
        .collect();

    FilteredResult::new(kept)
}

/// Check one word against the length and letter constraints, ignoring case
#[must_use]
pub fn satisfies(word: &str, constraints: &SearchConstraints) -> bool {
    satisfies_uppercase(&word.to_uppercase(), constraints)
}

/// `word` is already uppercased; length counts chars of that form
fn satisfies_uppercase(word: &str, constraints: &SearchConstraints) -> bool {
    if let Some(length) = constraints.length
        && word.chars().count() != length
    {
        return false;
    }

    let letters: FxHashSet<char> = word.chars().collect();

    constraints
        .required
        .iter()
        .all(|letter| letters.contains(&letter.to_ascii_uppercase()))
        && !constraints
            .excluded
            .iter()
            .any(|letter| letters.contains(&letter.to_ascii_uppercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(required: &str, excluded: &str, length: &str, pattern: &str) -> SearchConstraints {
        SearchConstraints::from_fields(required, excluded, length, pattern).unwrap()
    }

    fn candidates(words: &[&str]) -> Vec<CandidateWord> {
        words.iter().map(|&w| CandidateWord::new(w)).collect()
    }

    #[test]
    fn required_letters_keep_order_and_uppercase() {
        let result = filter_candidates(
            &candidates(&["aural", "plant", "laugh"]),
            &fields("AUL", "", "", ""),
        );
        assert_eq!(result.words(), ["AURAL", "LAUGH"]);
    }

    #[test]
    fn excluded_letter_anywhere_rejects() {
        let result = filter_candidates(
            &candidates(&["zebra", "cobra", "Sabra"]),
            &fields("", "cyt", "5", "??ra?"),
        );
        assert_eq!(result.words(), ["ZEBRA", "SABRA"]);
    }

    #[test]
    fn length_is_checked_even_if_service_ignores_it() {
        let result = filter_candidates(
            &candidates(&["cat", "cart", "coat", "ca"]),
            &fields("c", "", "4", ""),
        );
        assert_eq!(result.words(), ["CART", "COAT"]);
    }

    #[test]
    fn pattern_positions_left_to_service() {
        // Positions are not re-checked; only length and letters are.
        let result = filter_candidates(
            &candidates(&["zebra", "cobra"]),
            &fields("", "cyt", "5", "??ra?"),
        );
        assert_eq!(result.words(), ["ZEBRA"]);
    }

    #[test]
    fn mixed_case_candidates_normalized() {
        let result = filter_candidates(&candidates(&["LaUgH"]), &fields("l", "", "", ""));
        assert_eq!(result.words(), ["LAUGH"]);
    }

    #[test]
    fn duplicates_are_preserved() {
        let result = filter_candidates(&candidates(&["plan", "plan"]), &fields("p", "", "", ""));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn empty_candidates_give_empty_result() {
        let result = filter_candidates(&[], &fields("a", "", "", ""));
        assert!(result.is_empty());
    }

    #[test]
    fn nothing_matches_gives_empty_result() {
        let result = filter_candidates(&candidates(&["plant"]), &fields("u", "", "", ""));
        assert!(result.is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let constraints = fields("ae", "s", "", "");
        let first = filter_candidates(
            &candidates(&["crane", "slate", "adieu", "beast", "ocean"]),
            &constraints,
        );
        let second = filter_words(first.iter(), &constraints);
        assert_eq!(first, second);
        assert_eq!(first.words(), ["CRANE", "ADIEU", "OCEAN"]);
    }

    #[test]
    fn length_counts_the_uppercased_word() {
        // "straße" uppercases to "STRASSE", one char longer
        let words = candidates(&["straße"]);

        let seven = SearchConstraints::default().with_length(7);
        let first = filter_candidates(&words, &seven);
        assert_eq!(first.words(), ["STRASSE"]);
        assert_eq!(filter_words(first.iter(), &seven), first);

        let six = SearchConstraints::default().with_length(6);
        let first = filter_candidates(&words, &six);
        assert!(first.is_empty());
        assert_eq!(filter_words(first.iter(), &six), first);
        assert!(!satisfies("straße", &six));
    }

    #[test]
    fn satisfies_with_no_constraints_accepts_everything() {
        assert!(satisfies("anything", &SearchConstraints::default()));
    }
}
