//! WeatherAPI.com integration
//!
//! Client for the WeatherAPI.com HTTP API (<https://www.weatherapi.com>).
//! Provides current conditions, multi-day forecasts with hourly detail,
//! astronomy and location search. Every request carries the API key as the
//! `key` query parameter.

pub mod client;
mod models;

pub use client::{
    MAX_FORECAST_DAYS, WeatherApiClient, WeatherApiConfig, WeatherApiError, WeatherClient,
};
pub use models::{
    ApiAstro, ApiAstronomy, ApiCondition, ApiCurrent, ApiDay, ApiForecast, ApiForecastDay,
    ApiHour, ApiLocation, AstronomyResponse, CurrentResponse, ForecastResponse, MoonIllumination,
    SearchLocation,
};
