//! Current weather snapshot entities

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::value_objects::{TemperatureUnit, UvLevel};

/// Weather condition as reported upstream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Condition text (e.g., "Partly cloudy")
    pub text: String,
    /// Icon reference, usually protocol-relative (`//cdn...`)
    #[serde(default)]
    pub icon: String,
    /// Upstream condition code
    #[serde(default)]
    pub code: u32,
}

impl Condition {
    /// Create a condition with text only
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon: String::new(),
            code: 0,
        }
    }

    /// Icon URL with an explicit scheme
    #[must_use]
    pub fn icon_url(&self) -> Option<String> {
        if self.icon.is_empty() {
            None
        } else if self.icon.starts_with("//") {
            Some(format!("https:{}", self.icon))
        } else {
            Some(self.icon.clone())
        }
    }
}

/// Location block of a weather snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    /// Place name
    pub name: String,
    /// Region or state, possibly empty
    #[serde(default)]
    pub region: String,
    /// Country, possibly empty
    #[serde(default)]
    pub country: String,
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lon: f64,
    /// IANA timezone id
    #[serde(default)]
    pub tz_id: String,
    /// Local date-time at the location, `"YYYY-MM-DD HH:MM"`
    pub localtime: String,
}

impl LocationInfo {
    /// Name with non-empty region and country appended
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut parts = vec![self.name.as_str()];
        parts.extend(
            [self.region.as_str(), self.country.as_str()]
                .into_iter()
                .filter(|p| !p.is_empty()),
        );
        parts.join(", ")
    }

    /// Date token of `localtime` (the text before the first space)
    ///
    /// Returns `None` when the token is empty or not a `YYYY-MM-DD` date.
    #[must_use]
    pub fn local_date(&self) -> Option<NaiveDate> {
        let token = self.localtime.split(' ').next()?;
        NaiveDate::parse_from_str(token, "%Y-%m-%d").ok()
    }

    /// Hour of day parsed from `localtime`
    ///
    /// Splits on the space, then on the colon, and parses the hour token.
    /// Returns `None` for malformed input.
    #[must_use]
    pub fn local_hour(&self) -> Option<u32> {
        let time = self.localtime.split(' ').nth(1)?;
        time.split(':').next()?.trim().parse().ok()
    }
}

/// Current-conditions block of a weather snapshot
///
/// Temperatures are carried in both units; [`TemperatureUnit`] picks one for
/// display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temp_c: f64,
    pub temp_f: f64,
    pub feelslike_c: f64,
    pub feelslike_f: f64,
    pub condition: Condition,
    /// Relative humidity percentage
    pub humidity: u8,
    pub wind_kph: f64,
    pub wind_mph: f64,
    /// Compass direction (e.g., "NW")
    #[serde(default)]
    pub wind_dir: String,
    /// UV index
    pub uv: f64,
    pub precip_mm: f64,
    pub vis_km: f64,
    pub vis_miles: f64,
    /// Whether it is daytime at the location
    #[serde(default)]
    pub is_day: bool,
    /// Upstream observation time
    #[serde(default)]
    pub last_updated: String,
}

impl CurrentConditions {
    /// Temperature in the given unit
    #[must_use]
    pub const fn temperature(&self, unit: TemperatureUnit) -> f64 {
        unit.pick(self.temp_c, self.temp_f)
    }

    /// Feels-like temperature in the given unit
    #[must_use]
    pub const fn feels_like(&self, unit: TemperatureUnit) -> f64 {
        unit.pick(self.feelslike_c, self.feelslike_f)
    }

    /// Wind speed in km/h for Celsius, mph for Fahrenheit
    #[must_use]
    pub const fn wind_speed(&self, unit: TemperatureUnit) -> f64 {
        unit.pick(self.wind_kph, self.wind_mph)
    }

    /// Banded UV exposure
    #[must_use]
    pub fn uv_level(&self) -> UvLevel {
        UvLevel::from_index(self.uv)
    }
}

/// A fetched current-weather payload
///
/// Immutable once fetched and replaced wholesale on the next fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: LocationInfo,
    pub current: CurrentConditions,
}
