//! Command implementations

pub mod find;

pub use find::{FindConfig, FindOutcome, find_words};
