//! One-shot search command
//!
//! Runs a single synchronous search and hands the outcome back for printing.

use crate::core::{ConstraintError, SearchConstraints};
use crate::search::{LookupService, SearchSession, SearchState};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Raw constraint fields as given on the command line
#[derive(Debug, Clone, Default)]
pub struct FindConfig {
    pub include: String,
    pub exclude: String,
    pub length: String,
    pub pattern: String,
    pub show_spinner: bool,
}

impl FindConfig {
    /// Parse the fields into constraints
    ///
    /// # Errors
    /// Returns the first malformed field.
    pub fn constraints(&self) -> Result<SearchConstraints, ConstraintError> {
        SearchConstraints::from_fields(&self.include, &self.exclude, &self.length, &self.pattern)
    }
}

/// A finished one-shot search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindOutcome {
    /// The constraints as parsed from the command line
    pub constraints: SearchConstraints,
    /// Terminal state, `Success` or `Failed`
    pub state: SearchState,
}

/// Run one search and return its outcome
///
/// # Errors
///
/// Returns an error if a field cannot be parsed. Search failures (validation,
/// rate limiting, transport) are reported through the returned state instead.
pub fn find_words<L: LookupService + ?Sized>(
    config: &FindConfig,
    lookup: &L,
) -> Result<FindOutcome, ConstraintError> {
    let constraints = config.constraints()?;
    let mut session = SearchSession::new();

    let spinner = config.show_spinner.then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Searching...");
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    });

    let state = session.search(lookup, constraints.clone()).clone();

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    Ok(FindOutcome { constraints, state })
}
