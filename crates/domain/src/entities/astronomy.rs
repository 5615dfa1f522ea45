//! Astronomy snapshot entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sun and moon times for one date at one location
///
/// Times are kept as the upstream strings (e.g., `"05:32 AM"`); the
/// upstream reports `"No moonrise"` style text when an event does not occur.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstronomySnapshot {
    /// The date these values apply to
    pub date: NaiveDate,
    pub sunrise: String,
    pub sunset: String,
    pub moonrise: String,
    pub moonset: String,
    /// Phase name (e.g., "Waxing Gibbous")
    pub moon_phase: String,
    /// Illuminated fraction, percent
    pub moon_illumination: f64,
}
