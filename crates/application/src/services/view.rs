//! Derived view state
//!
//! Pure functions computed from a loaded bundle; nothing here is persisted.

use chrono::{Local, Timelike};
use domain::entities::{ForecastSet, HourlyEntry, WeatherSnapshot};

/// Default length of the hourly strip
pub const DEFAULT_HOURLY_WINDOW: usize = 7;

/// Slice of today's hours starting at the location's local hour
///
/// Falls back to the device's current hour when `localtime` cannot be
/// parsed.
#[must_use]
pub fn hourly_window<'a>(
    weather: &WeatherSnapshot,
    forecast: &'a ForecastSet,
    len: usize,
) -> &'a [HourlyEntry] {
    hourly_window_at(weather, forecast, len, Local::now().hour())
}

/// [`hourly_window`] with an explicit device hour
///
/// The slice never wraps into the next day, so it can be shorter than
/// `len` late in the day.
#[must_use]
pub fn hourly_window_at<'a>(
    weather: &WeatherSnapshot,
    forecast: &'a ForecastSet,
    len: usize,
    device_hour: u32,
) -> &'a [HourlyEntry] {
    let Some(today) = forecast.today() else {
        return &[];
    };
    let hour = weather.location.local_hour().unwrap_or(device_hour);
    let hours = today.hours.as_slice();
    let start = usize::try_from(hour).map_or(hours.len(), |h| h.min(hours.len()));
    let end = start.saturating_add(len).min(hours.len());
    &hours[start..end]
}

/// Time-of-day greeting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    /// Greeting text
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Morning => "Good Morning",
            Self::Afternoon => "Good Afternoon",
            Self::Evening => "Good Evening",
        }
    }

    /// Emoji shown next to the greeting
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Morning => "☀️",
            Self::Afternoon => "🌤️",
            Self::Evening => "🌙",
        }
    }
}

impl std::fmt::Display for Greeting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.message(), self.emoji())
    }
}

/// Greeting for an hour of day
#[must_use]
pub const fn greeting(hour: u32) -> Greeting {
    if hour < 12 {
        Greeting::Morning
    } else if hour < 18 {
        Greeting::Afternoon
    } else {
        Greeting::Evening
    }
}

/// Greeting for the device's current hour
///
/// Uses the device clock, not the displayed location's local time.
#[must_use]
pub fn current_greeting() -> Greeting {
    greeting(Local::now().hour())
}
