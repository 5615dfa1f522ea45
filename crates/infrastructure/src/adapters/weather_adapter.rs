//! Weather adapter - Implements WeatherPort using integration_weather

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use chrono::NaiveDate;
use domain::entities::{
    AstronomySnapshot, Condition, CurrentConditions, ForecastDay, ForecastSet, HourlyEntry,
    LocationInfo, LocationSuggestion, WeatherSnapshot,
};
use domain::value_objects::LocationQuery;
use integration_weather::{
    ApiCondition, ApiCurrent, ApiForecastDay, ApiHour, ApiLocation, AstronomyResponse,
    SearchLocation, WeatherApiClient, WeatherApiConfig, WeatherApiError, WeatherClient,
};
use tracing::{debug, instrument};

/// Adapter for the WeatherAPI.com client
pub struct WeatherApiAdapter {
    client: Arc<dyn WeatherClient>,
}

impl std::fmt::Debug for WeatherApiAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherApiAdapter")
            .field("client", &"WeatherClient")
            .finish()
    }
}

impl WeatherApiAdapter {
    /// Create a new adapter backed by the HTTP client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: WeatherApiConfig) -> Result<Self, ApplicationError> {
        let client =
            WeatherApiClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an adapter over any weather client
    #[must_use]
    pub fn with_client(client: Arc<dyn WeatherClient>) -> Self {
        Self { client }
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherApiError) -> ApplicationError {
        match err {
            WeatherApiError::ConnectionFailed(e)
            | WeatherApiError::RequestFailed(e)
            | WeatherApiError::ParseError(e)
            | WeatherApiError::InvalidRequest(e)
            | WeatherApiError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            WeatherApiError::Timeout { timeout_secs } => ApplicationError::ExternalService(
                format!("Weather request timed out after {timeout_secs}s"),
            ),
            WeatherApiError::Unauthorized(e) => ApplicationError::NotAuthorized(e),
            WeatherApiError::LocationNotFound(e) => ApplicationError::NotFound(e),
            WeatherApiError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }

    fn map_condition(condition: ApiCondition) -> Condition {
        Condition {
            text: condition.text,
            icon: condition.icon,
            code: condition.code,
        }
    }

    fn map_location(location: ApiLocation) -> LocationInfo {
        LocationInfo {
            name: location.name,
            region: location.region,
            country: location.country,
            lat: location.lat,
            lon: location.lon,
            tz_id: location.tz_id,
            localtime: location.localtime,
        }
    }

    fn map_current(current: ApiCurrent) -> CurrentConditions {
        CurrentConditions {
            temp_c: current.temp_c,
            temp_f: current.temp_f,
            feelslike_c: current.feelslike_c,
            feelslike_f: current.feelslike_f,
            condition: Self::map_condition(current.condition),
            humidity: current.humidity,
            wind_kph: current.wind_kph,
            wind_mph: current.wind_mph,
            wind_dir: current.wind_dir,
            uv: current.uv,
            precip_mm: current.precip_mm,
            vis_km: current.vis_km,
            vis_miles: current.vis_miles,
            is_day: current.is_day,
            last_updated: current.last_updated,
        }
    }

    fn map_hour(hour: ApiHour) -> HourlyEntry {
        HourlyEntry {
            time: hour.time,
            temp_c: hour.temp_c,
            temp_f: hour.temp_f,
            condition: Self::map_condition(hour.condition),
            chance_of_rain: hour.chance_of_rain,
            will_it_rain: hour.will_it_rain,
        }
    }

    fn map_day(day: ApiForecastDay) -> Result<ForecastDay, ApplicationError> {
        let date = NaiveDate::parse_from_str(&day.date, "%Y-%m-%d").map_err(|e| {
            ApplicationError::ExternalService(format!(
                "Invalid forecast date '{}': {e}",
                day.date
            ))
        })?;
        let summary = day.day;
        Ok(ForecastDay {
            date,
            max_temp_c: summary.maxtemp_c,
            max_temp_f: summary.maxtemp_f,
            min_temp_c: summary.mintemp_c,
            min_temp_f: summary.mintemp_f,
            avg_temp_c: summary.avgtemp_c,
            avg_temp_f: summary.avgtemp_f,
            condition: Self::map_condition(summary.condition),
            chance_of_rain: summary.daily_chance_of_rain,
            total_precip_mm: summary.totalprecip_mm,
            uv: summary.uv,
            hours: day.hour.into_iter().map(Self::map_hour).collect(),
        })
    }

    fn map_astronomy(response: AstronomyResponse, date: NaiveDate) -> AstronomySnapshot {
        let astro = response.astronomy.astro;
        AstronomySnapshot {
            date,
            sunrise: astro.sunrise,
            sunset: astro.sunset,
            moonrise: astro.moonrise,
            moonset: astro.moonset,
            moon_phase: astro.moon_phase,
            moon_illumination: astro.moon_illumination.percent(),
        }
    }

    fn map_suggestion(location: SearchLocation) -> LocationSuggestion {
        LocationSuggestion {
            id: location.id,
            name: location.name,
            region: location.region,
            country: location.country,
            lat: location.lat,
            lon: location.lon,
            url: location.url,
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherApiAdapter {
    #[instrument(skip(self, query), fields(query = %query))]
    async fn current(&self, query: &LocationQuery) -> Result<WeatherSnapshot, ApplicationError> {
        let response = self
            .client
            .current(query.as_str())
            .await
            .map_err(Self::map_error)?;

        debug!(
            location = %response.location.name,
            temp_c = response.current.temp_c,
            "Retrieved current weather"
        );

        Ok(WeatherSnapshot {
            location: Self::map_location(response.location),
            current: Self::map_current(response.current),
        })
    }

    #[instrument(skip(self, query), fields(query = %query, days))]
    async fn forecast(
        &self,
        query: &LocationQuery,
        days: u8,
    ) -> Result<ForecastSet, ApplicationError> {
        let response = self
            .client
            .forecast(query.as_str(), days)
            .await
            .map_err(Self::map_error)?;

        let days = response
            .forecast
            .forecastday
            .into_iter()
            .map(Self::map_day)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(days = days.len(), "Retrieved weather forecast");
        Ok(ForecastSet::new(days))
    }

    #[instrument(skip(self, query), fields(query = %query, %date))]
    async fn astronomy(
        &self,
        query: &LocationQuery,
        date: NaiveDate,
    ) -> Result<AstronomySnapshot, ApplicationError> {
        let response = self
            .client
            .astronomy(query.as_str(), date)
            .await
            .map_err(Self::map_error)?;

        debug!("Retrieved astronomy");
        Ok(Self::map_astronomy(response, date))
    }

    #[instrument(skip(self))]
    async fn search_locations(
        &self,
        text: &str,
    ) -> Result<Vec<LocationSuggestion>, ApplicationError> {
        let locations = self.client.search(text).await.map_err(Self::map_error)?;
        debug!(count = locations.len(), "Retrieved location suggestions");
        Ok(locations.into_iter().map(Self::map_suggestion).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use integration_weather::{ApiAstro, ApiAstronomy, ApiDay, MoonIllumination};

    fn api_condition(text: &str) -> ApiCondition {
        ApiCondition {
            text: text.to_string(),
            icon: "//cdn.weatherapi.com/weather/64x64/day/116.png".to_string(),
            code: 1003,
        }
    }

    fn api_location() -> ApiLocation {
        ApiLocation {
            name: "London".to_string(),
            region: "City of London, Greater London".to_string(),
            country: "United Kingdom".to_string(),
            lat: 51.52,
            lon: -0.11,
            tz_id: "Europe/London".to_string(),
            localtime: "2024-05-01 14:30".to_string(),
        }
    }

    fn api_forecast_day(date: &str) -> ApiForecastDay {
        ApiForecastDay {
            date: date.to_string(),
            day: ApiDay {
                maxtemp_c: 20.0,
                maxtemp_f: 68.0,
                mintemp_c: 10.0,
                mintemp_f: 50.0,
                avgtemp_c: 15.0,
                avgtemp_f: 59.0,
                totalprecip_mm: 1.2,
                daily_chance_of_rain: 40,
                condition: api_condition("Patchy rain"),
                uv: 4.0,
            },
            hour: vec![ApiHour {
                time: format!("{date} 00:00"),
                temp_c: 11.0,
                temp_f: 51.8,
                condition: api_condition("Clear"),
                will_it_rain: false,
                chance_of_rain: 0,
            }],
        }
    }

    #[test]
    fn maps_status_errors() {
        assert!(matches!(
            WeatherApiAdapter::map_error(WeatherApiError::Unauthorized("bad".into())),
            ApplicationError::NotAuthorized(_)
        ));
        assert!(matches!(
            WeatherApiAdapter::map_error(WeatherApiError::RateLimitExceeded),
            ApplicationError::RateLimited
        ));
        assert!(matches!(
            WeatherApiAdapter::map_error(WeatherApiError::LocationNotFound("x".into())),
            ApplicationError::NotFound(_)
        ));
    }

    #[test]
    fn maps_transport_errors_to_external_service() {
        for err in [
            WeatherApiError::ConnectionFailed("refused".into()),
            WeatherApiError::RequestFailed("reset".into()),
            WeatherApiError::Timeout { timeout_secs: 15 },
            WeatherApiError::ParseError("eof".into()),
        ] {
            assert!(matches!(
                WeatherApiAdapter::map_error(err),
                ApplicationError::ExternalService(_)
            ));
        }
    }

    #[test]
    fn maps_location_block() {
        let info = WeatherApiAdapter::map_location(api_location());
        assert_eq!(info.name, "London");
        assert_eq!(info.localtime, "2024-05-01 14:30");
        assert_eq!(info.local_hour(), Some(14));
    }

    #[test]
    fn maps_forecast_day_with_hours() {
        let day = WeatherApiAdapter::map_day(api_forecast_day("2024-05-01")).unwrap();
        assert_eq!(day.date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(day.chance_of_rain, 40);
        assert_eq!(day.hours.len(), 1);
        assert_eq!(day.hours[0].time, "2024-05-01 00:00");
        assert_eq!(day.condition.text, "Patchy rain");
    }

    #[test]
    fn rejects_malformed_forecast_date() {
        let result = WeatherApiAdapter::map_day(api_forecast_day("01/05/2024"));
        assert!(matches!(result, Err(ApplicationError::ExternalService(_))));
    }

    #[test]
    fn maps_astronomy_illumination() {
        let response = AstronomyResponse {
            location: api_location(),
            astronomy: ApiAstronomy {
                astro: ApiAstro {
                    sunrise: "05:33 AM".to_string(),
                    sunset: "08:24 PM".to_string(),
                    moonrise: "02:01 AM".to_string(),
                    moonset: "11:47 AM".to_string(),
                    moon_phase: "Waning Crescent".to_string(),
                    moon_illumination: MoonIllumination::Text("48".to_string()),
                },
            },
        };
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let snapshot = WeatherApiAdapter::map_astronomy(response, date);
        assert_eq!(snapshot.sunrise, "05:33 AM");
        assert!((snapshot.moon_illumination - 48.0).abs() < f64::EPSILON);
    }

    #[test]
    fn maps_search_location() {
        let suggestion = WeatherApiAdapter::map_suggestion(SearchLocation {
            id: Some(2_801_268),
            name: "Accra".to_string(),
            region: "Greater Accra".to_string(),
            country: "Ghana".to_string(),
            lat: Some(5.55),
            lon: Some(-0.22),
            url: Some("accra-greater-accra-ghana".to_string()),
        });
        assert_eq!(suggestion.label(), "Accra, Greater Accra, Ghana");
    }
}
