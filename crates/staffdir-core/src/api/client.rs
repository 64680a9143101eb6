//! API client for the randomuser.me people endpoint.
//!
//! `ApiClient` performs the single GET a directory load needs and hands the
//! raw body back; decoding into `Person` values happens in `models`, so a
//! malformed body surfaces as a decode failure rather than a transport one.

use std::future::Future;
use std::time::Duration;

use reqwest::{header, Client};
use tracing::debug;

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// HTTP request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Anything that can produce the raw JSON body of a people page.
///
/// The store only depends on this trait; `ApiClient` is the production
/// implementation.
pub trait PeopleSource {
    fn fetch_body(&self) -> impl Future<Output = Result<String, ApiError>> + Send;
}

/// API client for randomuser.me.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    endpoint: String,
}

impl ApiClient {
    /// Create a new API client for the given endpoint URL
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }
}

impl PeopleSource for ApiClient {
    async fn fetch_body(&self) -> Result<String, ApiError> {
        debug!(url = %self.endpoint, "Fetching people");

        let response = self
            .client
            .get(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let response = Self::check_response(response).await?;
        let body = response.text().await?;

        debug!(bytes = body.len(), "People response received");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_keeps_endpoint() {
        let client = ApiClient::new("https://example.test/api/?results=3")
            .expect("client should build");
        assert_eq!(client.endpoint(), "https://example.test/api/?results=3");

        let cloned = client.clone();
        assert_eq!(cloned.endpoint(), client.endpoint());
    }
}
