//! HTTP client for the HotelHelper service
//!
//! Wraps `reqwest` for the two form-encoded POST endpoints the TUI talks to:
//! `/register` and `/search`. Every failure in the request/response pipeline
//! (connect, HTTP status, body read, JSON parse) is collapsed into the single
//! [`TransportError`] class; callers display one fixed message and never
//! distinguish timeout from server error from parse failure.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::gate::search::SearchResponse;

/// Default service address
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Undifferentiated failure anywhere in the request/response pipeline.
///
/// Deliberately a single class: the UI reports every transport failure with
/// one fixed message, so nothing finer than the formatted cause is kept.
#[derive(Debug, Error)]
#[error("transport failure: {0}")]
pub struct TransportError(String);

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self(err.to_string())
    }
}

#[cfg(test)]
impl TransportError {
    /// Build a failure directly, for exercising error paths without a socket
    pub(crate) fn simulated(cause: &str) -> Self {
        Self(cause.to_string())
    }
}

/// Client for the HotelHelper service endpoints.
///
/// Use [`ApiClient::new`] for the configured service address or
/// [`ApiClient::with_base_url`] to point at a mock server in tests.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL, falling back to the default
    /// local address when `None`.
    pub fn new(base_url: Option<&str>) -> Result<Self, TransportError> {
        Self::with_base_url(base_url.unwrap_or(DEFAULT_BASE_URL))
    }

    /// Create a client with an explicit base URL.
    pub fn with_base_url(base_url: &str) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("hotelhelper-tui/0.1")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// POST the registration fields to `/register`.
    ///
    /// The body carries exactly the two validated field values; validation
    /// itself never reaches the network.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), TransportError> {
        let url = format!("{}/register", self.base_url);
        tracing::debug!(%url, username, "submitting registration");

        self.client
            .post(&url)
            .form(&[("username", username), ("password", password)])
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    /// POST one search request to `/search` and parse the JSON response.
    ///
    /// Exactly one request per call; no retry, no cancellation.
    pub async fn search(
        &self,
        body: &[(String, String)],
    ) -> Result<SearchResponse, TransportError> {
        let url = format!("{}/search", self.base_url);
        tracing::debug!(%url, fields = body.len(), "submitting search");

        let response = self
            .client
            .post(&url)
            .form(body)
            .send()
            .await?
            .error_for_status()?
            .json::<SearchResponse>()
            .await?;

        Ok(response)
    }
}
