//! Forecast entities

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::Condition;
use crate::value_objects::TemperatureUnit;

/// One hour of a forecast day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyEntry {
    /// Local time, `"YYYY-MM-DD HH:MM"`
    pub time: String,
    pub temp_c: f64,
    pub temp_f: f64,
    pub condition: Condition,
    /// Chance of rain, percent
    pub chance_of_rain: u8,
    #[serde(default)]
    pub will_it_rain: bool,
}

impl HourlyEntry {
    /// Temperature in the given unit
    #[must_use]
    pub const fn temperature(&self, unit: TemperatureUnit) -> f64 {
        unit.pick(self.temp_c, self.temp_f)
    }

    /// The `HH:MM` part of `time`, or the whole value if it has no space
    #[must_use]
    pub fn clock(&self) -> &str {
        self.time.split_once(' ').map_or(self.time.as_str(), |(_, t)| t)
    }
}

/// One day of a forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub max_temp_c: f64,
    pub max_temp_f: f64,
    pub min_temp_c: f64,
    pub min_temp_f: f64,
    pub avg_temp_c: f64,
    pub avg_temp_f: f64,
    pub condition: Condition,
    /// Daily chance of rain, percent
    pub chance_of_rain: u8,
    pub total_precip_mm: f64,
    pub uv: f64,
    /// Hourly entries in order, normally 24
    pub hours: Vec<HourlyEntry>,
}

impl ForecastDay {
    /// Daily high in the given unit
    #[must_use]
    pub const fn max_temp(&self, unit: TemperatureUnit) -> f64 {
        unit.pick(self.max_temp_c, self.max_temp_f)
    }

    /// Daily low in the given unit
    #[must_use]
    pub const fn min_temp(&self, unit: TemperatureUnit) -> f64 {
        unit.pick(self.min_temp_c, self.min_temp_f)
    }

    /// Daily average in the given unit
    #[must_use]
    pub const fn avg_temp(&self, unit: TemperatureUnit) -> f64 {
        unit.pick(self.avg_temp_c, self.avg_temp_f)
    }
}

/// Ordered per-day forecast, today first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastSet {
    pub days: Vec<ForecastDay>,
}

impl ForecastSet {
    /// Wrap a list of days
    #[must_use]
    pub const fn new(days: Vec<ForecastDay>) -> Self {
        Self { days }
    }

    /// The first day, if any
    #[must_use]
    pub fn today(&self) -> Option<&ForecastDay> {
        self.days.first()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hour(time: &str) -> HourlyEntry {
        HourlyEntry {
            time: time.to_string(),
            temp_c: 20.0,
            temp_f: 68.0,
            condition: Condition::new("Clear"),
            chance_of_rain: 0,
            will_it_rain: false,
        }
    }

    #[test]
    fn clock_strips_date() {
        assert_eq!(hour("2024-05-01 14:00").clock(), "14:00");
        assert_eq!(hour("14:00").clock(), "14:00");
    }

    #[test]
    fn hourly_temperature_by_unit() {
        let h = hour("2024-05-01 14:00");
        assert!((h.temperature(TemperatureUnit::Fahrenheit) - 68.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_set_has_no_today() {
        let set = ForecastSet::default();
        assert!(set.is_empty());
        assert!(set.today().is_none());
    }
}
