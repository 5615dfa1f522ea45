//! Dashboard, preference and telemetry configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Derived-view settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Number of hourly entries shown from the current hour
    #[serde(default = "default_hourly_window")]
    pub hourly_window: usize,

    /// Quiet period before a location search is sent, in milliseconds
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
}

const fn default_hourly_window() -> usize {
    7
}

const fn default_search_debounce_ms() -> u64 {
    300
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            hourly_window: default_hourly_window(),
            search_debounce_ms: default_search_debounce_ms(),
        }
    }
}

impl DashboardConfig {
    /// Search debounce as a `Duration`
    #[must_use]
    pub const fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

/// Durable preference storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesConfig {
    /// JSON file holding user preferences
    #[serde(default = "default_preferences_path")]
    pub path: String,
}

fn default_preferences_path() -> String {
    "clima-preferences.json".to_string()
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            path: default_preferences_path(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryAppConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TelemetryAppConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            json: false,
        }
    }
}
