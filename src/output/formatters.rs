//! Formatting utilities for terminal output

use crate::core::SearchConstraints;

/// Gap between result columns
const COLUMN_GAP: usize = 2;

/// One-line summary of the active constraints, e.g. `length 5 | pattern ??RA? | without C Y T`
#[must_use]
pub fn describe_constraints(constraints: &SearchConstraints) -> String {
    let mut parts = Vec::new();

    if !constraints.required.is_empty() {
        parts.push(format!("with {}", spaced_upper(constraints.required.iter())));
    }
    if !constraints.excluded.is_empty() {
        parts.push(format!(
            "without {}",
            spaced_upper(constraints.excluded.iter())
        ));
    }
    if let Some(length) = constraints.length {
        parts.push(format!("length {length}"));
    }
    if let Some(pattern) = &constraints.pattern {
        parts.push(format!("pattern {}", pattern.as_str().to_uppercase()));
    }

    if parts.is_empty() {
        "no constraints".to_string()
    } else {
        parts.join(" | ")
    }
}

fn spaced_upper(letters: impl Iterator<Item = char>) -> String {
    letters
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lay words out in rows of equal-width columns fitting `width` characters
///
/// Always at least one column, even if a word is wider than `width`.
#[must_use]
pub fn columns(words: &[String], width: usize) -> Vec<String> {
    let cell = words
        .iter()
        .map(|w| w.chars().count())
        .max()
        .unwrap_or(0)
        + COLUMN_GAP;
    let per_row = (width / cell.max(1)).max(1);

    words
        .chunks(per_row)
        .map(|row| {
            let line: String = row.iter().map(|w| format!("{w:<cell$}")).collect();
            line.trim_end().to_string()
        })
        .collect()
}
