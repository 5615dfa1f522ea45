//! Astronomy loading
//!
//! Sun and moon times are an enhancement: they are fetched only after the
//! current weather is known and a failure never reaches the caller.

use std::{fmt, sync::Arc};

use domain::{
    entities::{AstronomySnapshot, WeatherSnapshot},
    value_objects::LocationQuery,
};
use tracing::{debug, instrument, warn};

use crate::ports::WeatherPort;

/// Loads astronomy data for the date of a weather snapshot
pub struct AstronomyLoader {
    weather: Arc<dyn WeatherPort>,
}

impl fmt::Debug for AstronomyLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AstronomyLoader").finish_non_exhaustive()
    }
}

impl AstronomyLoader {
    /// Create a new loader
    pub fn new(weather: Arc<dyn WeatherPort>) -> Self {
        Self { weather }
    }

    /// Load astronomy for the snapshot's local date
    ///
    /// Returns `None` without a network call when there is no snapshot or
    /// its `localtime` carries no date, and `None` when the fetch fails.
    #[instrument(skip(self, query, weather), fields(query = %query))]
    pub async fn load(
        &self,
        query: &LocationQuery,
        weather: Option<&WeatherSnapshot>,
    ) -> Option<AstronomySnapshot> {
        let Some(weather) = weather else {
            debug!("No weather yet, skipping astronomy");
            return None;
        };
        let Some(date) = weather.location.local_date() else {
            debug!(localtime = %weather.location.localtime, "No local date, skipping astronomy");
            return None;
        };

        match self.weather.astronomy(query, date).await {
            Ok(astro) => Some(astro),
            Err(e) => {
                warn!(error = %e, date = %date, "Astronomy fetch failed");
                None
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{error::ApplicationError, ports::MockWeatherPort, testing::weather};

    fn query() -> LocationQuery {
        LocationQuery::new("London").unwrap()
    }

    fn astro(date: NaiveDate) -> AstronomySnapshot {
        AstronomySnapshot {
            date,
            sunrise: "05:32 AM".to_string(),
            sunset: "08:27 PM".to_string(),
            moonrise: "02:51 AM".to_string(),
            moonset: "01:14 PM".to_string(),
            moon_phase: "Waning Crescent".to_string(),
            moon_illumination: 42.0,
        }
    }

    #[tokio::test]
    async fn without_weather_makes_no_request() {
        let mut port = MockWeatherPort::new();
        port.expect_astronomy().never();
        let loader = AstronomyLoader::new(Arc::new(port));
        assert!(loader.load(&query(), None).await.is_none());
    }

    #[tokio::test]
    async fn without_local_date_makes_no_request() {
        let mut port = MockWeatherPort::new();
        port.expect_astronomy().never();
        let loader = AstronomyLoader::new(Arc::new(port));
        let w = weather("London", "", 12.0);
        assert!(loader.load(&query(), Some(&w)).await.is_none());
    }

    #[tokio::test]
    async fn requests_snapshot_date() {
        let mut port = MockWeatherPort::new();
        port.expect_astronomy()
            .withf(|q, date| {
                q.as_str() == "London" && *date == NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
            })
            .times(1)
            .returning(|_, date| Ok(astro(date)));
        let loader = AstronomyLoader::new(Arc::new(port));
        let w = weather("London", "2024-05-01 14:30", 12.0);

        let result = loader.load(&query(), Some(&w)).await.unwrap();
        assert_eq!(result.moon_phase, "Waning Crescent");
    }

    #[tokio::test]
    async fn failure_is_swallowed() {
        let mut port = MockWeatherPort::new();
        port.expect_astronomy()
            .times(1)
            .returning(|_, _| Err(ApplicationError::ExternalService("boom".into())));
        let loader = AstronomyLoader::new(Arc::new(port));
        let w = weather("London", "2024-05-01 14:30", 12.0);
        assert!(loader.load(&query(), Some(&w)).await.is_none());
    }
}
