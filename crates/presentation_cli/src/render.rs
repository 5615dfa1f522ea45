//! Plain-text rendering of dashboard state

use application::Greeting;
use domain::{
    entities::{AstronomySnapshot, ForecastSet, HourlyEntry, LocationSuggestion, Photo, WeatherSnapshot},
    value_objects::TemperatureUnit,
};

/// Wind speed unit shown next to the temperature unit
const fn wind_unit(unit: TemperatureUnit) -> &'static str {
    match unit {
        TemperatureUnit::Celsius => "km/h",
        TemperatureUnit::Fahrenheit => "mph",
    }
}

pub fn greeting_line(greeting: Greeting, weather: &WeatherSnapshot) -> String {
    format!("{greeting}  {}", weather.location.display_name())
}

pub fn current(weather: &WeatherSnapshot, unit: TemperatureUnit) -> String {
    let now = &weather.current;
    [
        format!(
            "{}  {}",
            unit.format(now.temp_c, now.temp_f),
            now.condition.text
        ),
        format!("Feels like {}", unit.format(now.feelslike_c, now.feelslike_f)),
        format!("Humidity   {}%", now.humidity),
        format!(
            "Wind       {:.0} {} {}",
            now.wind_speed(unit),
            wind_unit(unit),
            now.wind_dir
        ),
        format!("UV         {:.0} ({})", now.uv, now.uv_level()),
        format!("Local time {}", weather.location.localtime),
    ]
    .join("\n")
}

pub fn hourly(hours: &[HourlyEntry], unit: TemperatureUnit) -> String {
    if hours.is_empty() {
        return "No hourly data for the rest of today".to_string();
    }
    hours
        .iter()
        .map(|h| {
            format!(
                "{:>5}  {:>5}  {:>3}%  {}",
                h.clock(),
                unit.format(h.temp_c, h.temp_f),
                h.chance_of_rain,
                h.condition.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn daily(forecast: &ForecastSet, unit: TemperatureUnit) -> String {
    forecast
        .days
        .iter()
        .map(|d| {
            format!(
                "{}  {:>5} / {:<5}  {:>3}%  {}",
                d.date.format("%a %d %b"),
                unit.format(d.max_temp_c, d.max_temp_f),
                unit.format(d.min_temp_c, d.min_temp_f),
                d.chance_of_rain,
                d.condition.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn astronomy(astro: &AstronomySnapshot) -> String {
    [
        format!("Sunrise  {}   Sunset  {}", astro.sunrise, astro.sunset),
        format!("Moonrise {}   Moonset {}", astro.moonrise, astro.moonset),
        format!(
            "Moon     {} ({:.0}% illuminated)",
            astro.moon_phase, astro.moon_illumination
        ),
    ]
    .join("\n")
}

pub fn suggestions(items: &[LocationSuggestion]) -> String {
    if items.is_empty() {
        return "No matching locations".to_string();
    }
    items
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{:>2}. {}", i + 1, s.label()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn photos(items: &[Photo]) -> String {
    if items.is_empty() {
        return "No photos found".to_string();
    }
    items
        .iter()
        .map(|p| format!("{}\n    {}", p.caption(), p.src.medium))
        .collect::<Vec<_>>()
        .join("\n")
}
