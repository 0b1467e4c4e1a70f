//! Search orchestration
//!
//! Drives one search through `Idle → Validating → Fetching → Success | Failed`.
//! The session owns the constraints and the state of the current search; both are
//! replaced wholesale on every submission.

use super::{LookupRequest, LookupService, build_request, filter_candidates, validate};
use crate::core::{CandidateWord, FilteredResult, SearchConstraints};
use crate::error::SearchError;
use tracing::{debug, info, warn};

/// Notice shown for a successful search with no surviving words
pub const NO_MATCHES_NOTICE: &str = "No matching words found";

/// Where the current search is
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchState {
    #[default]
    Idle,
    Validating,
    Fetching,
    Success(FilteredResult),
    Failed(SearchError),
}

impl SearchState {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Fetching => "fetching",
            Self::Success(_) => "success",
            Self::Failed(_) => "failed",
        }
    }

    /// User-facing message for terminal states
    ///
    /// An empty success yields the "no matches" notice rather than an error.
    #[must_use]
    pub fn notice(&self) -> Option<String> {
        match self {
            Self::Success(result) if result.is_empty() => Some(NO_MATCHES_NOTICE.to_string()),
            Self::Failed(err) => Some(err.to_string()),
            _ => None,
        }
    }
}

/// Owner of one user's search: constraints plus state
#[derive(Debug, Default)]
pub struct SearchSession {
    constraints: SearchConstraints,
    state: SearchState,
}

impl SearchSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &SearchState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub const fn constraints(&self) -> &SearchConstraints {
        &self.constraints
    }

    #[inline]
    #[must_use]
    pub const fn is_fetching(&self) -> bool {
        matches!(self.state, SearchState::Fetching)
    }

    /// Words of the last successful search
    #[must_use]
    pub const fn results(&self) -> Option<&FilteredResult> {
        match &self.state {
            SearchState::Success(result) => Some(result),
            _ => None,
        }
    }

    /// Start a new search
    ///
    /// Validates the constraints and, if they pass, moves to `Fetching` and returns
    /// the one request the caller must send. Submitting while a previous search is
    /// still fetching is allowed; the earlier request is not cancelled.
    ///
    /// # Errors
    /// Returns the validation failure; the session is then `Failed` and no request
    /// should be sent.
    pub fn submit(&mut self, constraints: SearchConstraints) -> Result<LookupRequest, SearchError> {
        if self.is_fetching() {
            warn!("new search submitted while a previous request is still in flight");
        }

        self.transition(SearchState::Idle);
        self.constraints = constraints;
        self.transition(SearchState::Validating);

        if let Err(err) = validate(&self.constraints) {
            info!(error = %err, "search rejected before fetching");
            self.transition(SearchState::Failed(err.clone()));
            return Err(err);
        }

        let request = build_request(&self.constraints);
        info!(
            pattern = %request.pattern,
            exclusion = request.exclusion.as_deref().unwrap_or(""),
            "issuing lookup"
        );
        self.transition(SearchState::Fetching);
        Ok(request)
    }

    /// Apply the response to the request returned by [`submit`](Self::submit)
    ///
    /// A well-formed response always ends in `Success`, even if nothing survives
    /// filtering. A response that arrives when the session is not fetching is
    /// discarded.
    pub fn complete(
        &mut self,
        response: Result<Vec<CandidateWord>, SearchError>,
    ) -> &SearchState {
        if !self.is_fetching() {
            warn!(state = self.state.name(), "discarding response outside of a fetch");
            return &self.state;
        }

        let next = match response {
            Ok(candidates) => {
                let result = filter_candidates(&candidates, &self.constraints);
                info!(
                    received = candidates.len(),
                    kept = result.len(),
                    "lookup succeeded"
                );
                SearchState::Success(result)
            }
            Err(err) => {
                if let SearchError::FetchFailed { reason } = &err {
                    warn!(%reason, "lookup failed");
                } else {
                    warn!(error = %err, "lookup failed");
                }
                SearchState::Failed(err)
            }
        };

        self.transition(next);
        &self.state
    }

    /// Run a whole search synchronously against a lookup service
    ///
    /// Issues at most one request; validation failures issue none.
    pub fn search<L: LookupService + ?Sized>(
        &mut self,
        lookup: &L,
        constraints: SearchConstraints,
    ) -> &SearchState {
        match self.submit(constraints) {
            Ok(request) => {
                let response = lookup.fetch(&request);
                self.complete(response)
            }
            Err(_) => &self.state,
        }
    }

    fn transition(&mut self, next: SearchState) {
        debug!(from = self.state.name(), to = next.name(), "search state");
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Lookup double recording every request it receives
    struct FakeLookup {
        response: Result<Vec<CandidateWord>, SearchError>,
        requests: Mutex<Vec<LookupRequest>>,
    }

    impl FakeLookup {
        fn returning(words: &[&str]) -> Self {
            Self {
                response: Ok(words.iter().map(|&w| CandidateWord::new(w)).collect()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn failing(err: SearchError) -> Self {
            Self {
                response: Err(err),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<LookupRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl LookupService for FakeLookup {
        fn fetch(&self, request: &LookupRequest) -> Result<Vec<CandidateWord>, SearchError> {
            self.requests.lock().unwrap().push(request.clone());
            self.response.clone()
        }
    }

    fn fields(required: &str, excluded: &str, length: &str, pattern: &str) -> SearchConstraints {
        SearchConstraints::from_fields(required, excluded, length, pattern).unwrap()
    }

    #[test]
    fn starts_idle() {
        let session = SearchSession::new();
        assert_eq!(session.state(), &SearchState::Idle);
        assert!(session.results().is_none());
    }

    #[test]
    fn end_to_end_zebra_cobra() {
        let lookup = FakeLookup::returning(&["zebra", "cobra"]);
        let mut session = SearchSession::new();

        let state = session.search(&lookup, fields("", "CYT", "5", "??RA?"));
        assert_eq!(
            state,
            &SearchState::Success(FilteredResult::new(vec!["ZEBRA".to_string()]))
        );

        let requests = lookup.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].query_pairs(),
            vec![
                ("sp", "??ra?".to_string()),
                ("q", "-c -y -t".to_string()),
                ("max", "200".to_string()),
                ("md", "d".to_string()),
            ]
        );
    }

    #[test]
    fn empty_criteria_sends_nothing() {
        let lookup = FakeLookup::returning(&["anything"]);
        let mut session = SearchSession::new();

        let state = session.search(&lookup, SearchConstraints::default());
        assert_eq!(state, &SearchState::Failed(SearchError::EmptyCriteria));
        assert!(lookup.requests().is_empty());
    }

    #[test]
    fn length_mismatch_sends_nothing() {
        let lookup = FakeLookup::returning(&["anything"]);
        let mut session = SearchSession::new();

        let state = session.search(&lookup, fields("", "", "4", "?????"));
        assert_eq!(
            state,
            &SearchState::Failed(SearchError::LengthMismatch {
                pattern: 5,
                length: 4
            })
        );
        assert!(lookup.requests().is_empty());
    }

    #[test]
    fn empty_response_is_success_with_notice() {
        let lookup = FakeLookup::returning(&[]);
        let mut session = SearchSession::new();

        let state = session.search(&lookup, fields("q", "", "", ""));
        assert_eq!(state, &SearchState::Success(FilteredResult::default()));
        assert_eq!(state.notice().as_deref(), Some(NO_MATCHES_NOTICE));
    }

    #[test]
    fn rate_limit_fails_with_specific_error() {
        let lookup = FakeLookup::failing(SearchError::RateLimited);
        let mut session = SearchSession::new();

        let state = session.search(&lookup, fields("a", "", "", ""));
        assert_eq!(state, &SearchState::Failed(SearchError::RateLimited));
        assert_eq!(lookup.requests().len(), 1);
    }

    #[test]
    fn fetch_failure_is_not_retried() {
        let lookup = FakeLookup::failing(SearchError::fetch_failed("503"));
        let mut session = SearchSession::new();

        let state = session.search(&lookup, fields("a", "", "", ""));
        assert!(matches!(state, SearchState::Failed(SearchError::FetchFailed { .. })));
        assert_eq!(lookup.requests().len(), 1);
    }

    #[test]
    fn submit_then_complete_via_fetching() {
        let mut session = SearchSession::new();
        let request = session.submit(fields("aul", "", "", "")).unwrap();
        assert!(session.is_fetching());
        assert_eq!(request.pattern, "*");

        let candidates = ["aural", "plant", "laugh"].map(CandidateWord::new).to_vec();
        session.complete(Ok(candidates));
        assert_eq!(session.results().unwrap().words(), ["AURAL", "LAUGH"]);
    }

    #[test]
    fn late_response_after_validation_failure_is_discarded() {
        let mut session = SearchSession::new();
        session.submit(fields("a", "", "", "")).unwrap();
        assert!(session.submit(SearchConstraints::default()).is_err());

        let state = session.complete(Ok(vec![CandidateWord::new("apple")]));
        assert_eq!(state, &SearchState::Failed(SearchError::EmptyCriteria));
    }

    #[test]
    fn new_submission_replaces_previous_results() {
        let mut session = SearchSession::new();
        session.search(&FakeLookup::returning(&["apple"]), fields("a", "", "", ""));
        assert_eq!(session.results().unwrap().len(), 1);

        session.submit(fields("b", "", "", "")).unwrap();
        assert!(session.results().is_none());
        assert_eq!(session.constraints().required.to_string(), "b");
    }

    #[test]
    fn notices() {
        assert_eq!(SearchState::Idle.notice(), None);
        assert_eq!(SearchState::Fetching.notice(), None);
        assert_eq!(
            SearchState::Success(FilteredResult::new(vec!["A".to_string()])).notice(),
            None
        );
        assert_eq!(
            SearchState::Failed(SearchError::RateLimited).notice(),
            Some(SearchError::RateLimited.to_string())
        );
    }
}
