//! Weather service port
//!
//! Defines the interface for weather data retrieval.

use async_trait::async_trait;
use chrono::NaiveDate;
use domain::{
    entities::{AstronomySnapshot, ForecastSet, LocationSuggestion, WeatherSnapshot},
    value_objects::LocationQuery,
};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather service operations
///
/// Every call is keyed by a [`LocationQuery`], passed upstream verbatim.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current conditions for a location
    async fn current(&self, query: &LocationQuery) -> Result<WeatherSnapshot, ApplicationError>;

    /// Get the daily forecast with nested hourly entries
    ///
    /// # Arguments
    /// * `query` - Location query
    /// * `days` - Number of days to forecast (1-7)
    async fn forecast(
        &self,
        query: &LocationQuery,
        days: u8,
    ) -> Result<ForecastSet, ApplicationError>;

    /// Get sun and moon times for one date
    async fn astronomy(
        &self,
        query: &LocationQuery,
        date: NaiveDate,
    ) -> Result<AstronomySnapshot, ApplicationError>;

    /// Search for locations matching free text
    async fn search_locations(
        &self,
        text: &str,
    ) -> Result<Vec<LocationSuggestion>, ApplicationError>;
}
