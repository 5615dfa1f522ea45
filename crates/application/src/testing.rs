//! Test fakes and fixtures shared by service tests

use std::{
    collections::HashMap,
    sync::atomic::{AtomicBool, AtomicU64, Ordering},
};

use async_trait::async_trait;
use chrono::NaiveDate;
use domain::entities::{
    Condition, CurrentConditions, ForecastDay, ForecastSet, HourlyEntry, LocationInfo,
    WeatherSnapshot,
};
use parking_lot::Mutex;

use crate::{
    error::ApplicationError,
    ports::{CacheStats, SessionCachePort},
};

/// In-memory session cache with optional write failures
#[derive(Debug, Default)]
pub struct InMemorySessionCache {
    entries: Mutex<HashMap<String, Vec<u8>>>,
    hits: AtomicU64,
    misses: AtomicU64,
    fail_writes: AtomicBool,
}

impl InMemorySessionCache {
    pub fn failing_writes() -> Self {
        let cache = Self::default();
        cache.fail_writes.store(true, Ordering::Relaxed);
        cache
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }
}

#[async_trait]
impl SessionCachePort for InMemorySessionCache {
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, ApplicationError> {
        let value = self.entries.lock().get(key).cloned();
        if value.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        Ok(value)
    }

    async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), ApplicationError> {
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(ApplicationError::Cache("storage full".to_string()));
        }
        self.entries.lock().insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), ApplicationError> {
        self.entries.lock().remove(key);
        Ok(())
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.lock().len() as u64,
        }
    }
}

pub fn weather(name: &str, localtime: &str, temp_c: f64) -> WeatherSnapshot {
    WeatherSnapshot {
        location: LocationInfo {
            name: name.to_string(),
            region: String::new(),
            country: "United Kingdom".to_string(),
            lat: 51.52,
            lon: -0.11,
            tz_id: "Europe/London".to_string(),
            localtime: localtime.to_string(),
        },
        current: CurrentConditions {
            temp_c,
            temp_f: temp_c * 9.0 / 5.0 + 32.0,
            feelslike_c: temp_c,
            feelslike_f: temp_c * 9.0 / 5.0 + 32.0,
            condition: Condition::new("Partly cloudy"),
            humidity: 60,
            wind_kph: 11.2,
            wind_mph: 6.9,
            wind_dir: "WSW".to_string(),
            uv: 4.0,
            precip_mm: 0.0,
            vis_km: 10.0,
            vis_miles: 6.0,
            is_day: true,
            last_updated: localtime.to_string(),
        },
    }
}

/// A forecast of `days` days with 24 hourly entries each
pub fn forecast(days: u32) -> ForecastSet {
    let start = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap_or_default();
    let days = (0..days)
        .map(|d| {
            let date = start + chrono::Days::new(u64::from(d));
            ForecastDay {
                date,
                max_temp_c: 20.0,
                max_temp_f: 68.0,
                min_temp_c: 10.0,
                min_temp_f: 50.0,
                avg_temp_c: 15.0,
                avg_temp_f: 59.0,
                condition: Condition::new("Sunny"),
                chance_of_rain: 10,
                total_precip_mm: 0.0,
                uv: 5.0,
                hours: (0..24)
                    .map(|h| HourlyEntry {
                        time: format!("{date} {h:02}:00"),
                        temp_c: f64::from(h),
                        temp_f: f64::from(h) * 9.0 / 5.0 + 32.0,
                        condition: Condition::new("Sunny"),
                        chance_of_rain: 0,
                        will_it_rain: false,
                    })
                    .collect(),
            }
        })
        .collect();
    ForecastSet::new(days)
}
