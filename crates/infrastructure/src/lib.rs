//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the WeatherAPI.com and
//! Pexels adapters, the Moka session cache and the JSON preference store.
//! Also owns configuration loading and logging setup.

pub mod adapters;
pub mod cache;
pub mod config;
pub mod preferences;
pub mod telemetry;

pub use adapters::*;
pub use cache::MokaSessionCache;
pub use config::{
    AppConfig, DashboardConfig, PexelsAppConfig, PreferencesConfig, RejectedOverride,
    TelemetryAppConfig, WeatherAppConfig,
};
pub use preferences::JsonFilePreferenceStore;
pub use telemetry::{env_filter, init_logging};
