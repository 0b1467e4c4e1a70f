//! Core domain types for word search
//!
//! This module contains the constraint and result types. Nothing here performs
//! I/O; the types are pure and independently testable.

mod candidate;
mod constraints;
mod letters;
mod pattern;

pub use candidate::{CandidateWord, FilteredResult};
pub use constraints::{
    ConstraintError, MAX_LENGTH, MIN_LENGTH, SearchConstraints, parse_length,
};
pub use letters::LetterSet;
pub use pattern::{Pattern, WILDCARD};
