//! UV index banding

use serde::{Deserialize, Serialize};
use std::fmt;

/// Exposure category for a UV index reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UvLevel {
    /// 0 to 2
    Low,
    /// Up to 5
    Moderate,
    /// Up to 7
    High,
    /// Up to 10
    VeryHigh,
    /// Above 10
    Extreme,
}

impl UvLevel {
    /// Band a raw UV index
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::value_objects::UvLevel;
    ///
    /// assert_eq!(UvLevel::from_index(2.0), UvLevel::Low);
    /// assert_eq!(UvLevel::from_index(6.5), UvLevel::High);
    /// assert_eq!(UvLevel::from_index(11.0), UvLevel::Extreme);
    /// ```
    #[must_use]
    pub fn from_index(index: f64) -> Self {
        if index <= 2.0 {
            Self::Low
        } else if index <= 5.0 {
            Self::Moderate
        } else if index <= 7.0 {
            Self::High
        } else if index <= 10.0 {
            Self::VeryHigh
        } else {
            Self::Extreme
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
            Self::Extreme => "Extreme",
        }
    }
}

impl fmt::Display for UvLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
