//! Temperature unit preference

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Display unit for temperatures
///
/// Snapshots carry both Celsius and Fahrenheit values; the unit only
/// selects which one is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TemperatureUnit {
    /// Degrees Celsius (default)
    #[default]
    #[serde(rename = "C")]
    Celsius,
    /// Degrees Fahrenheit
    #[serde(rename = "F")]
    Fahrenheit,
}

impl TemperatureUnit {
    /// Short code stored in preferences ("C" or "F")
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Celsius => "C",
            Self::Fahrenheit => "F",
        }
    }

    /// Unit symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }

    /// The other unit
    #[must_use]
    pub const fn toggle(&self) -> Self {
        match self {
            Self::Celsius => Self::Fahrenheit,
            Self::Fahrenheit => Self::Celsius,
        }
    }

    /// Pick the value matching this unit from a Celsius/Fahrenheit pair
    #[must_use]
    pub const fn pick(&self, celsius: f64, fahrenheit: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => fahrenheit,
        }
    }

    /// Format a paired value rounded to whole degrees, e.g. `"18°C"`
    #[must_use]
    pub fn format(&self, celsius: f64, fahrenheit: f64) -> String {
        format!("{:.0}{}", self.pick(celsius, fahrenheit).round(), self.symbol())
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TemperatureUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" | "celsius" => Ok(Self::Celsius),
            "f" | "fahrenheit" => Ok(Self::Fahrenheit),
            _ => Err(DomainError::InvalidTemperatureUnit(s.to_string())),
        }
    }
}
