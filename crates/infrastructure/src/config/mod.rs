//! Application configuration
//!
//! Split into focused sub-modules:
//! - `integrations`: WeatherAPI.com and Pexels clients
//! - `dashboard`: derived-view settings, preference storage, logging
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `config.toml`, then `CLIMA_*` environment variables with `__` between
//! nested keys (e.g. `CLIMA_WEATHER__API_KEY`).

mod dashboard;
mod integrations;

use std::path::Path;

use application::error::ApplicationError;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

pub use dashboard::{DashboardConfig, PreferencesConfig, TelemetryAppConfig};
pub use integrations::{PexelsAppConfig, WeatherAppConfig};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "CLIMA";

/// A base URL override that was replaced by its default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedOverride {
    pub field: &'static str,
    pub value: String,
    pub fallback: String,
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// WeatherAPI.com configuration
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Pexels configuration
    #[serde(default)]
    pub pexels: PexelsAppConfig,

    /// Derived-view settings
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Durable preference storage
    #[serde(default)]
    pub preferences: PreferencesConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryAppConfig,

    /// Overrides discarded by [`AppConfig::normalize`], kept until logging
    /// is initialised
    #[serde(skip)]
    pub rejected_overrides: Vec<RejectedOverride>,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and the process
    /// environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config.toml"), None)
    }

    /// Load configuration from a specific file and environment
    ///
    /// `env` replaces the process environment when given, which keeps tests
    /// independent of each other.
    pub fn load_from(
        file: &Path,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from(file).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;
        config.normalize();
        Ok(config)
    }

    /// Validate base URL overrides, falling back to defaults when invalid
    ///
    /// Loading runs before any subscriber exists, so rejections are recorded
    /// in `rejected_overrides` instead of being logged here.
    pub fn normalize(&mut self) {
        let weather = normalize_base_url(
            "weather.base_url",
            &self.weather.base_url,
            integrations::default_weather_base_url,
        );
        let pexels = normalize_base_url(
            "pexels.base_url",
            &self.pexels.base_url,
            integrations::default_pexels_base_url,
        );

        for (target, result) in [
            (&mut self.weather.base_url, weather),
            (&mut self.pexels.base_url, pexels),
        ] {
            match result {
                Ok(url) => *target = url,
                Err(rejected) => {
                    target.clone_from(&rejected.fallback);
                    self.rejected_overrides.push(rejected);
                },
            }
        }
    }

    /// Warn about every override `normalize` discarded
    ///
    /// Call once logging is initialised.
    pub fn log_rejected_overrides(&self) {
        for rejected in &self.rejected_overrides {
            warn!(
                field = %rejected.field,
                value = %rejected.value,
                fallback = %rejected.fallback,
                "Ignoring base URL override that is not an absolute http(s) URL"
            );
        }
    }

    /// The WeatherAPI.com key
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` when the key is missing or
    /// blank. Nothing can be fetched without it.
    pub fn weather_api_key(&self) -> Result<&SecretString, ApplicationError> {
        match &self.weather.api_key {
            Some(key) if !key.expose_secret().trim().is_empty() => Ok(key),
            _ => Err(ApplicationError::Configuration(format!(
                "Weather API key is not set (set {ENV_PREFIX}_WEATHER__API_KEY or weather.api_key)"
            ))),
        }
    }
}

/// Trim trailing slashes and require an absolute `http(s)` URL
fn normalize_base_url(
    field: &'static str,
    value: &str,
    default: fn() -> String,
) -> Result<String, RejectedOverride> {
    let trimmed = value.trim().trim_end_matches('/');
    match Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {
            Ok(trimmed.to_string())
        },
        _ => Err(RejectedOverride {
            field,
            value: value.to_string(),
            fallback: default(),
        }),
    }
}
