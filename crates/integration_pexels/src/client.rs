//! Pexels API client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

use crate::{config::PexelsConfig, error::PexelsError, models::PexelsSearchResponse};

/// Largest page size the API accepts
const MAX_PER_PAGE: u32 = 80;

/// Photo search client trait
#[async_trait]
pub trait PhotoSearchClient: Send + Sync {
    /// Search photos, returning at most `per_page` results
    async fn search(&self, query: &str, per_page: u32)
    -> Result<PexelsSearchResponse, PexelsError>;
}

/// Pexels HTTP client
#[derive(Debug)]
pub struct PexelsClient {
    client: Client,
    api_key: String,
    base_url: String,
    timeout_secs: u64,
}

impl PexelsClient {
    /// Create a new Pexels client
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or HTTP client cannot be created.
    pub fn new(config: &PexelsConfig) -> Result<Self, PexelsError> {
        if config.api_key.trim().is_empty() {
            return Err(PexelsError::ConfigurationError(
                "Pexels API key is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PexelsError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_secs: config.timeout_secs,
        })
    }

    fn search_url(&self) -> String {
        format!("{}/v1/search", self.base_url)
    }
}

#[async_trait]
impl PhotoSearchClient for PexelsClient {
    #[instrument(skip(self), fields(provider = "pexels"))]
    async fn search(
        &self,
        query: &str,
        per_page: u32,
    ) -> Result<PexelsSearchResponse, PexelsError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(PexelsError::InvalidQuery(
                "Search query cannot be empty".to_string(),
            ));
        }
        let per_page = per_page.clamp(1, MAX_PER_PAGE);

        let url = self.search_url();
        debug!(url = %url, per_page, "Sending Pexels search request");

        let response = self
            .client
            .get(&url)
            .header("Authorization", &self.api_key)
            .header("Accept", "application/json")
            .query(&[("query", query.to_string()), ("per_page", per_page.to_string())])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PexelsError::Timeout {
                        timeout_secs: self.timeout_secs,
                    }
                } else if e.is_connect() {
                    PexelsError::ConnectionFailed(e.to_string())
                } else {
                    PexelsError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        debug!(status = %status, "Received Pexels response");

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(PexelsError::RateLimitExceeded);
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(PexelsError::AuthenticationFailed(
                "Invalid Pexels API key".to_string(),
            ));
        }

        if status.is_server_error() {
            return Err(PexelsError::ServiceUnavailable(format!("HTTP {status}")));
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(PexelsError::RequestFailed(format!(
                "HTTP {status}: {error_text}"
            )));
        }

        let body: PexelsSearchResponse = response
            .json()
            .await
            .map_err(|e| PexelsError::ParseError(e.to_string()))?;

        debug!(count = body.photos.len(), "Pexels search completed");
        Ok(body)
    }
}
