//! Forecast orchestration
//!
//! Loads the current conditions and the forecast for one location query,
//! serving repeats from the session cache.

use std::{fmt, sync::Arc};

use chrono::{DateTime, Utc};
use domain::{
    DomainError,
    entities::{ForecastSet, WeatherSnapshot},
    value_objects::LocationQuery,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{SessionCacheExt, SessionCachePort, WeatherPort},
};

/// Prefix of weather cache keys
pub const WEATHER_CACHE_PREFIX: &str = "weather_cache_";

/// Default number of forecast days
pub const DEFAULT_FORECAST_DAYS: u8 = 7;

/// Cache key for a location query
#[must_use]
pub fn weather_cache_key(query: &LocationQuery) -> String {
    format!("{WEATHER_CACHE_PREFIX}{query}")
}

/// Current conditions and forecast for one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherBundle {
    pub weather: WeatherSnapshot,
    pub forecast: ForecastSet,
}

/// Session cache entry for a weather bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub weather: WeatherSnapshot,
    pub forecast: ForecastSet,
    pub fetched_at: DateTime<Utc>,
}

impl From<CacheEntry> for WeatherBundle {
    fn from(entry: CacheEntry) -> Self {
        Self {
            weather: entry.weather,
            forecast: entry.forecast,
        }
    }
}

/// Orchestrates cache lookup and the current then forecast fetch
///
/// This is the only writer of `weather_cache_*` entries. Entries never
/// expire within a session; a refetch overwrites the whole entry.
pub struct ForecastService {
    weather: Arc<dyn WeatherPort>,
    cache: Arc<dyn SessionCachePort>,
    forecast_days: u8,
}

impl fmt::Debug for ForecastService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForecastService")
            .field("forecast_days", &self.forecast_days)
            .finish_non_exhaustive()
    }
}

impl ForecastService {
    /// Create a service fetching the default seven days
    pub fn new(weather: Arc<dyn WeatherPort>, cache: Arc<dyn SessionCachePort>) -> Self {
        Self {
            weather,
            cache,
            forecast_days: DEFAULT_FORECAST_DAYS,
        }
    }

    /// Set the number of forecast days
    ///
    /// # Errors
    ///
    /// Returns a validation error for zero days.
    pub fn with_forecast_days(mut self, days: u8) -> Result<Self, ApplicationError> {
        if days == 0 {
            return Err(DomainError::validation("forecast days must be at least 1").into());
        }
        self.forecast_days = days;
        Ok(self)
    }

    /// Number of forecast days requested on a miss
    #[must_use]
    pub const fn forecast_days(&self) -> u8 {
        self.forecast_days
    }

    /// Load weather and forecast for a query
    ///
    /// A cache hit is returned as stored. On a miss the current conditions
    /// are fetched before the forecast; both must succeed. Any upstream
    /// failure becomes [`ApplicationError::Fetch`] with the cause logged.
    /// Failing to write the cache is logged and does not fail the load.
    #[instrument(skip(self, query), fields(query = %query))]
    pub async fn load(&self, query: &LocationQuery) -> Result<WeatherBundle, ApplicationError> {
        let key = weather_cache_key(query);

        match self.cache.get::<CacheEntry>(&key).await {
            Ok(Some(entry)) => {
                debug!(fetched_at = %entry.fetched_at, "Weather cache hit");
                return Ok(entry.into());
            },
            Ok(None) => debug!("Weather cache miss"),
            Err(e) => warn!(error = %e, "Unreadable weather cache entry, refetching"),
        }

        let weather = self
            .weather
            .current(query)
            .await
            .map_err(|e| fetch_failure("current", &e))?;

        let forecast = self
            .weather
            .forecast(query, self.forecast_days)
            .await
            .map_err(|e| fetch_failure("forecast", &e))?;

        let entry = CacheEntry {
            weather,
            forecast,
            fetched_at: Utc::now(),
        };
        if let Err(e) = self.cache.set(&key, &entry).await {
            warn!(error = %e, "Failed to store weather cache entry");
        }

        Ok(entry.into())
    }
}

fn fetch_failure(stage: &'static str, cause: &ApplicationError) -> ApplicationError {
    warn!(stage, error = %cause, "Weather fetch failed");
    ApplicationError::fetch_failed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ports::MockWeatherPort,
        services::view::hourly_window_at,
        testing::{InMemorySessionCache, forecast, weather},
    };

    fn query(s: &str) -> LocationQuery {
        LocationQuery::new(s).unwrap()
    }

    #[tokio::test]
    async fn second_load_is_served_from_cache() {
        let mut port = MockWeatherPort::new();
        port.expect_current()
            .times(1)
            .returning(|_| Ok(weather("London", "2024-05-01 14:30", 18.0)));
        port.expect_forecast()
            .withf(|q, days| q.as_str() == "London" && *days == 7)
            .times(1)
            .returning(|_, _| Ok(forecast(7)));

        let cache = Arc::new(InMemorySessionCache::default());
        let service = ForecastService::new(Arc::new(port), cache.clone());

        let first = service.load(&query("London")).await.unwrap();
        let second = service.load(&query("London")).await.unwrap();

        assert_eq!(first, second);
        assert!(cache.contains("weather_cache_London"));
    }

    #[tokio::test]
    async fn london_scenario_populates_weather_and_window() {
        let mut port = MockWeatherPort::new();
        port.expect_current()
            .returning(|_| Ok(weather("London", "2024-05-01 14:30", 18.0)));
        port.expect_forecast().returning(|_, _| Ok(forecast(7)));

        let service = ForecastService::new(
            Arc::new(port),
            Arc::new(InMemorySessionCache::default()),
        );
        let bundle = service.load(&query("London")).await.unwrap();

        assert!((bundle.weather.current.temp_c - 18.0).abs() < f64::EPSILON);
        assert_eq!(bundle.forecast.len(), 7);
        let window = hourly_window_at(&bundle.weather, &bundle.forecast, 7, 3);
        assert_eq!(window.len(), 7);
        assert_eq!(window[0].time, "2024-05-01 14:00");
    }

    #[tokio::test]
    async fn forecast_failure_fails_whole_load_and_caches_nothing() {
        let mut port = MockWeatherPort::new();
        port.expect_current()
            .times(1)
            .returning(|_| Ok(weather("London", "2024-05-01 14:30", 18.0)));
        port.expect_forecast()
            .times(1)
            .returning(|_, _| Err(ApplicationError::RateLimited));

        let cache = Arc::new(InMemorySessionCache::default());
        let service = ForecastService::new(Arc::new(port), cache.clone());

        let err = service.load(&query("London")).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Fetch(_)));
        assert_eq!(err.to_string(), "Failed to load weather. Please retry.");
        assert_eq!(cache.len(), 0);
    }

    #[tokio::test]
    async fn current_failure_skips_forecast() {
        let mut port = MockWeatherPort::new();
        port.expect_current()
            .times(1)
            .returning(|_| Err(ApplicationError::NotAuthorized("bad key".into())));
        port.expect_forecast().never();

        let service = ForecastService::new(
            Arc::new(port),
            Arc::new(InMemorySessionCache::default()),
        );
        let err = service.load(&query("London")).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Fetch(_)));
    }

    #[tokio::test]
    async fn cache_write_failure_is_not_surfaced() {
        let mut port = MockWeatherPort::new();
        port.expect_current()
            .returning(|_| Ok(weather("Paris", "2024-05-01 09:00", 12.0)));
        port.expect_forecast().returning(|_, _| Ok(forecast(3)));

        let service = ForecastService::new(
            Arc::new(port),
            Arc::new(InMemorySessionCache::failing_writes()),
        );
        let bundle = service.load(&query("Paris")).await.unwrap();
        assert_eq!(bundle.weather.location.name, "Paris");
    }

    #[tokio::test]
    async fn corrupt_entry_is_treated_as_miss() {
        let mut port = MockWeatherPort::new();
        port.expect_current()
            .times(1)
            .returning(|_| Ok(weather("Oslo", "2024-05-01 08:00", 4.0)));
        port.expect_forecast().times(1).returning(|_, _| Ok(forecast(7)));

        let cache = Arc::new(InMemorySessionCache::default());
        cache
            .set_bytes("weather_cache_Oslo", b"{garbage".to_vec())
            .await
            .unwrap();
        let service = ForecastService::new(Arc::new(port), cache.clone());

        let bundle = service.load(&query("Oslo")).await.unwrap();
        assert_eq!(bundle.weather.location.name, "Oslo");
        let stored: Option<CacheEntry> = cache.get("weather_cache_Oslo").await.unwrap();
        assert!(stored.is_some());
    }

    #[tokio::test]
    async fn distinct_queries_use_distinct_keys() {
        let mut port = MockWeatherPort::new();
        port.expect_current()
            .times(2)
            .returning(|q| Ok(weather(q.as_str(), "2024-05-01 08:00", 4.0)));
        port.expect_forecast().times(2).returning(|_, _| Ok(forecast(1)));

        let service = ForecastService::new(
            Arc::new(port),
            Arc::new(InMemorySessionCache::default()),
        );
        let a = service.load(&query("Oslo")).await.unwrap();
        let b = service.load(&query("59.91,10.75")).await.unwrap();
        assert_ne!(a.weather.location.name, b.weather.location.name);
    }

    #[test]
    fn zero_forecast_days_rejected() {
        let service = ForecastService::new(
            Arc::new(MockWeatherPort::new()),
            Arc::new(InMemorySessionCache::default()),
        );
        let err = service.with_forecast_days(0).unwrap_err();
        assert!(matches!(err, ApplicationError::Domain(_)));
    }

    #[test]
    fn cache_key_uses_prefix() {
        assert_eq!(
            weather_cache_key(&query("5.6,-0.18")),
            "weather_cache_5.6,-0.18"
        );
    }
}
