//! Display functions for command results

use super::formatters::{columns, describe_constraints};
use crate::core::{FilteredResult, SearchConstraints};
use crate::search::SearchState;
use colored::Colorize;

/// Width used to lay out result columns
const OUTPUT_WIDTH: usize = 72;

/// Print the outcome of a search
pub fn print_search_result(constraints: &SearchConstraints, state: &SearchState) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Searching: {}",
        describe_constraints(constraints).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match state {
        SearchState::Success(result) if !result.is_empty() => print_words(result),
        SearchState::Failed(_) => {
            if let Some(notice) = state.notice() {
                println!("\n{}", format!("❌ {notice}").red().bold());
            }
        }
        _ => {
            if let Some(notice) = state.notice() {
                println!("\n{}", notice.yellow());
            }
        }
    }
}

fn print_words(result: &FilteredResult) {
    println!(
        "\n{} {}\n",
        result.len().to_string().bright_cyan().bold(),
        if result.len() == 1 { "match" } else { "matches" }
    );
    for row in columns(result.words(), OUTPUT_WIDTH) {
        println!("  {}", row.bright_white().bold());
    }
}

/// Render results as a JSON array of uppercase words
///
/// # Errors
/// Returns an error if serialization fails.
pub fn results_json(result: &FilteredResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
