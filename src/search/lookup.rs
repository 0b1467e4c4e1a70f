//! Lookup service abstraction
//!
//! Defines the seam between the search orchestrator and whatever answers a
//! `LookupRequest`.

use super::LookupRequest;
use crate::core::CandidateWord;
use crate::error::SearchError;

/// Something that can answer a lookup request with candidate words
///
/// Implementations send exactly one request per call and never retry. `Send +
/// Sync` lets a fetch run on a worker thread while the UI stays responsive.
pub trait LookupService: Send + Sync {
    /// Fetch candidates for a request, in the service's order
    ///
    /// # Errors
    /// - `SearchError::RateLimited` if the service reports rate limiting
    /// - `SearchError::FetchFailed` for any other transport, status or decode failure
    fn fetch(&self, request: &LookupRequest) -> Result<Vec<CandidateWord>, SearchError>;
}
