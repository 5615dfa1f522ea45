//! Integration configurations: WeatherAPI.com and Pexels.

use integration_pexels::PexelsConfig;
use integration_weather::WeatherApiConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

// ==============================
// Weather Configuration
// ==============================

/// WeatherAPI.com configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// API key (required; sensitive)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// API base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Number of forecast days (1-7)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
}

pub(crate) fn default_weather_base_url() -> String {
    "https://api.weatherapi.com/v1".to_string()
}

const fn default_timeout_secs() -> u64 {
    15
}

const fn default_forecast_days() -> u8 {
    7
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_weather_base_url(),
            timeout_secs: default_timeout_secs(),
            forecast_days: default_forecast_days(),
        }
    }
}

impl WeatherAppConfig {
    /// Convert to `integration_weather`'s `WeatherApiConfig`
    ///
    /// The key is copied out of its secret wrapper only here, at the point
    /// where the client is built.
    #[must_use]
    pub fn to_client_config(&self, api_key: &SecretString) -> WeatherApiConfig {
        WeatherApiConfig {
            api_key: api_key.expose_secret().to_string(),
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

// ==============================
// Pexels Configuration
// ==============================

/// Pexels photo search configuration
///
/// Optional: without a key the dashboard simply shows no photos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PexelsAppConfig {
    /// API key (sensitive)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// API base URL
    #[serde(default = "default_pexels_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Photos requested per search
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

pub(crate) fn default_pexels_base_url() -> String {
    "https://api.pexels.com".to_string()
}

const fn default_per_page() -> u32 {
    5
}

impl Default for PexelsAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_pexels_base_url(),
            timeout_secs: default_timeout_secs(),
            per_page: default_per_page(),
        }
    }
}

impl PexelsAppConfig {
    /// Convert to `integration_pexels`'s `PexelsConfig`
    ///
    /// Returns `None` when no non-empty key is configured.
    #[must_use]
    pub fn to_client_config(&self) -> Option<PexelsConfig> {
        let key = self.api_key.as_ref()?.expose_secret();
        if key.trim().is_empty() {
            return None;
        }
        Some(PexelsConfig {
            api_key: key.to_string(),
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        })
    }
}
