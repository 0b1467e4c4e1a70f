//! Word Finder
//!
//! Search for words by letters they must contain, letters they must not contain,
//! exact length, and a positional pattern. Candidates come from a public
//! word-lookup service and are re-checked locally before being shown.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use word_finder::client::{ClientConfig, DatamuseClient};
//! use word_finder::core::SearchConstraints;
//! use word_finder::search::{SearchSession, SearchState};
//!
//! let client = DatamuseClient::new(&ClientConfig::default()).unwrap();
//! let constraints = SearchConstraints::from_fields("", "CYT", "5", "??RA?").unwrap();
//!
//! let mut session = SearchSession::new();
//! if let SearchState::Success(words) = session.search(&client, constraints) {
//!     for word in words.iter() {
//!         println!("{word}");
//!     }
//! }
//! ```

// Core domain types
pub mod core;

// Search failures
pub mod error;

// Validation, query building, filtering and orchestration
pub mod search;

// Lookup service clients
pub mod client;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
