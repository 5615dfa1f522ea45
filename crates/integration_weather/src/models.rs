//! Weather data models
//!
//! Response shapes of the WeatherAPI.com endpoints. Field names follow the
//! upstream JSON.

use serde::{Deserialize, Deserializer, Serialize};

/// Condition block shared by current, daily and hourly data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiCondition {
    pub text: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub code: u32,
}

/// Location block of current, forecast and astronomy responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiLocation {
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub tz_id: String,
    /// `"YYYY-MM-DD HH:MM"` at the location
    #[serde(default)]
    pub localtime: String,
}

/// Current conditions block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiCurrent {
    #[serde(default)]
    pub last_updated: String,
    pub temp_c: f64,
    pub temp_f: f64,
    #[serde(default, deserialize_with = "flag")]
    pub is_day: bool,
    pub condition: ApiCondition,
    #[serde(default)]
    pub wind_mph: f64,
    #[serde(default)]
    pub wind_kph: f64,
    #[serde(default)]
    pub wind_dir: String,
    #[serde(default)]
    pub precip_mm: f64,
    #[serde(default)]
    pub humidity: u8,
    #[serde(default)]
    pub feelslike_c: f64,
    #[serde(default)]
    pub feelslike_f: f64,
    #[serde(default)]
    pub vis_km: f64,
    #[serde(default)]
    pub vis_miles: f64,
    #[serde(default)]
    pub uv: f64,
}

/// Response of `current.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentResponse {
    pub location: ApiLocation,
    pub current: ApiCurrent,
}

/// Day summary inside a forecast day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiDay {
    pub maxtemp_c: f64,
    pub maxtemp_f: f64,
    pub mintemp_c: f64,
    pub mintemp_f: f64,
    #[serde(default)]
    pub avgtemp_c: f64,
    #[serde(default)]
    pub avgtemp_f: f64,
    #[serde(default)]
    pub totalprecip_mm: f64,
    #[serde(default)]
    pub daily_chance_of_rain: u8,
    pub condition: ApiCondition,
    #[serde(default)]
    pub uv: f64,
}

/// One hour inside a forecast day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiHour {
    /// `"YYYY-MM-DD HH:MM"`
    pub time: String,
    pub temp_c: f64,
    pub temp_f: f64,
    pub condition: ApiCondition,
    #[serde(default, deserialize_with = "flag")]
    pub will_it_rain: bool,
    #[serde(default)]
    pub chance_of_rain: u8,
}

/// One day of `forecast.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiForecastDay {
    /// `"YYYY-MM-DD"`
    pub date: String,
    pub day: ApiDay,
    #[serde(default)]
    pub hour: Vec<ApiHour>,
}

/// Forecast block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiForecast {
    pub forecastday: Vec<ApiForecastDay>,
}

/// Response of `forecast.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub location: ApiLocation,
    pub current: ApiCurrent,
    pub forecast: ApiForecast,
}

/// Moon illumination, reported either as a number or a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MoonIllumination {
    Number(f64),
    Text(String),
}

impl MoonIllumination {
    /// Illumination percentage, zero when the text is not numeric
    #[must_use]
    pub fn percent(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse().unwrap_or_default(),
        }
    }
}

/// Sun and moon block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiAstro {
    pub sunrise: String,
    pub sunset: String,
    pub moonrise: String,
    pub moonset: String,
    pub moon_phase: String,
    pub moon_illumination: MoonIllumination,
}

/// Astronomy wrapper block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiAstronomy {
    pub astro: ApiAstro,
}

/// Response of `astronomy.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstronomyResponse {
    pub location: ApiLocation,
    pub astronomy: ApiAstronomy,
}

/// One entry of `search.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchLocation {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Error body returned with non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorDetail {
    pub code: u32,
    pub message: String,
}

/// Upstream encodes booleans as `0`/`1`
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Int(u8),
        Bool(bool),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Int(n) => n != 0,
        Flag::Bool(b) => b,
    })
}
