//! Datamuse word-lookup client
//!
//! Blocking HTTP client for the public `/words` endpoint. One call, one GET:
//! nothing is retried or rate limited on our side.

use crate::core::CandidateWord;
use crate::error::SearchError;
use crate::search::{LookupRequest, LookupService};
use anyhow::{Context, Result};
use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

/// Public word-lookup endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.datamuse.com/words";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for the lookup service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// HTTP implementation of [`LookupService`]
#[derive(Debug, Clone)]
pub struct DatamuseClient {
    client: Client,
    endpoint: Url,
}

impl DatamuseClient {
    /// Build a client for the configured endpoint
    ///
    /// # Errors
    /// Returns an error if the endpoint is not a valid URL or the HTTP client
    /// cannot be constructed (e.g. TLS backend initialisation fails).
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)
            .with_context(|| format!("Invalid lookup endpoint '{}'", config.endpoint))?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, endpoint })
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Full request URL, query string included
    #[must_use]
    pub fn request_url(&self, request: &LookupRequest) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().extend_pairs(request.query_pairs());
        url
    }
}

impl LookupService for DatamuseClient {
    fn fetch(&self, request: &LookupRequest) -> Result<Vec<CandidateWord>, SearchError> {
        let url = self.request_url(request);
        debug!(%url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(SearchError::fetch_failed)?;

        check_status(response.status())?;

        let body = response.text().map_err(SearchError::fetch_failed)?;
        parse_candidates(&body)
    }
}

/// Map an HTTP status to the search error taxonomy
///
/// # Errors
/// - `SearchError::RateLimited` for 429
/// - `SearchError::FetchFailed` for any other non-2xx status
pub fn check_status(status: StatusCode) -> Result<(), SearchError> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(SearchError::RateLimited);
    }
    if !status.is_success() {
        return Err(SearchError::fetch_failed(format!("HTTP {status}")));
    }
    Ok(())
}

/// Decode a response body into candidates, keeping service order
///
/// # Errors
/// Returns `SearchError::FetchFailed` if the body is not an array of word objects.
pub fn parse_candidates(body: &str) -> Result<Vec<CandidateWord>, SearchError> {
    serde_json::from_str(body)
        .map_err(|e| SearchError::fetch_failed(format!("malformed response: {e}")))
}
