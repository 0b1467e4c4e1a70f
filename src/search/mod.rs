//! Word search pipeline
//!
//! Validation, query construction, lookup, and client-side filtering, tied
//! together by `SearchSession`.

mod engine;
pub mod filter;
mod lookup;
pub mod query;
mod validate;

pub use engine::{NO_MATCHES_NOTICE, SearchSession, SearchState};
pub use filter::{filter_candidates, filter_words, satisfies};
pub use lookup::LookupService;
pub use query::{LookupRequest, MAX_RESULTS, build_request, exclusion_term};
pub use validate::validate;
