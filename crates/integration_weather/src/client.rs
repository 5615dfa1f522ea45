//! WeatherAPI.com client
//!
//! HTTP client for the current, forecast, astronomy and search endpoints.

use std::{fmt, time::Duration};

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{
    ApiErrorBody, AstronomyResponse, CurrentResponse, ForecastResponse, SearchLocation,
};

/// Upstream error code for an unknown location
const NO_MATCHING_LOCATION: u32 = 1006;

/// Upper bound on forecast days accepted by the API
pub const MAX_FORECAST_DAYS: u8 = 7;

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherApiError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Request exceeded the client timeout
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// API key missing, invalid or disabled
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Upstream found no location matching the query
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    /// Upstream rejected the request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherApiConfig {
    /// API key sent as the `key` query parameter
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// API base URL (default: <https://api.weatherapi.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 15)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.weatherapi.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    15
}

impl Default for WeatherApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl fmt::Debug for WeatherApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherApiConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl WeatherApiConfig {
    /// Create a configuration with the given key and default endpoints
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current conditions for a query
    async fn current(&self, query: &str) -> Result<CurrentResponse, WeatherApiError>;

    /// Get a forecast of `days` days (clamped to 1-7) for a query
    async fn forecast(&self, query: &str, days: u8) -> Result<ForecastResponse, WeatherApiError>;

    /// Get astronomy for a query on a date
    async fn astronomy(
        &self,
        query: &str,
        date: NaiveDate,
    ) -> Result<AstronomyResponse, WeatherApiError>;

    /// Search locations by free text
    async fn search(&self, text: &str) -> Result<Vec<SearchLocation>, WeatherApiError>;
}

/// WeatherAPI.com HTTP client implementation
#[derive(Debug)]
pub struct WeatherApiClient {
    client: Client,
    config: WeatherApiConfig,
}

impl WeatherApiClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherApiConfig) -> Result<Self, WeatherApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherApiError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'))
    }

    /// Issue a GET with the API key and decode the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, WeatherApiError> {
        let url = self.endpoint_url(endpoint);
        debug!(url = %url, "Sending weather request");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .query(&[("key", self.config.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    WeatherApiError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else if e.is_connect() {
                    WeatherApiError::ConnectionFailed(e.to_string())
                } else {
                    WeatherApiError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        debug!(status = %status, "Received weather response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::map_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| WeatherApiError::ParseError(e.to_string()))
    }

    /// Map a non-success status and its body to an error
    fn map_status(status: StatusCode, body: &str) -> WeatherApiError {
        let detail = serde_json::from_str::<ApiErrorBody>(body).ok().map(|b| b.error);
        let message = detail
            .as_ref()
            .map_or_else(|| format!("HTTP {status}"), |d| d.message.clone());

        match status {
            StatusCode::TOO_MANY_REQUESTS => WeatherApiError::RateLimitExceeded,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                WeatherApiError::Unauthorized(message)
            },
            StatusCode::BAD_REQUEST
                if detail
                    .as_ref()
                    .is_some_and(|d| d.code == NO_MATCHING_LOCATION) =>
            {
                WeatherApiError::LocationNotFound(message)
            },
            StatusCode::BAD_REQUEST => WeatherApiError::InvalidRequest(message),
            s if s.is_server_error() => WeatherApiError::ServiceUnavailable(message),
            _ => WeatherApiError::RequestFailed(message),
        }
    }
}

#[async_trait]
impl WeatherClient for WeatherApiClient {
    #[instrument(skip(self))]
    async fn current(&self, query: &str) -> Result<CurrentResponse, WeatherApiError> {
        self.get_json("current.json", &[("q", query.to_string())])
            .await
    }

    #[instrument(skip(self))]
    async fn forecast(&self, query: &str, days: u8) -> Result<ForecastResponse, WeatherApiError> {
        let days = days.clamp(1, MAX_FORECAST_DAYS);
        self.get_json(
            "forecast.json",
            &[("q", query.to_string()), ("days", days.to_string())],
        )
        .await
    }

    #[instrument(skip(self))]
    async fn astronomy(
        &self,
        query: &str,
        date: NaiveDate,
    ) -> Result<AstronomyResponse, WeatherApiError> {
        self.get_json(
            "astronomy.json",
            &[
                ("q", query.to_string()),
                ("dt", date.format("%Y-%m-%d").to_string()),
            ],
        )
        .await
    }

    #[instrument(skip(self))]
    async fn search(&self, text: &str) -> Result<Vec<SearchLocation>, WeatherApiError> {
        self.get_json("search.json", &[("q", text.to_string())])
            .await
    }
}
