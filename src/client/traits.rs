//! Trait abstraction for the service client to enable mocking in tests

use async_trait::async_trait;

use super::http::{ApiClient, TransportError};
use crate::gate::search::SearchResponse;

/// Trait for service client operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiClientTrait: Send + Sync {
    /// POST the registration fields to the service
    async fn register(&self, username: &str, password: &str) -> Result<(), TransportError>;

    /// POST one search request and parse the JSON response
    async fn search(&self, body: &[(String, String)]) -> Result<SearchResponse, TransportError>;
}

#[async_trait]
impl ApiClientTrait for ApiClient {
    async fn register(&self, username: &str, password: &str) -> Result<(), TransportError> {
        ApiClient::register(self, username, password).await
    }

    async fn search(&self, body: &[(String, String)]) -> Result<SearchResponse, TransportError> {
        ApiClient::search(self, body).await
    }
}
