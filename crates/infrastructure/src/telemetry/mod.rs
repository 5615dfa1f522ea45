//! Logging initialisation
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter`. `RUST_LOG`
//! takes precedence over the configured filter.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::TelemetryAppConfig;

/// Build the filter: `RUST_LOG` when set and valid, else `fallback`
#[must_use]
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialise global logging
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(
    config: &TelemetryAppConfig,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let registry = tracing_subscriber::registry().with(env_filter(&config.log_filter));

    if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_fallback_still_builds_a_filter() {
        let filter = env_filter("[not a directive");
        assert!(!filter.to_string().is_empty());
    }

    #[test]
    fn second_init_fails_instead_of_panicking() {
        let config = TelemetryAppConfig::default();
        let _ = init_logging(&config);
        assert!(init_logging(&config).is_err());
    }
}
