//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
///
/// Every variant is a local validation failure: it is detected before any
/// network call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A location query was empty or whitespace only
    #[error("Location query cannot be empty")]
    EmptyLocationQuery,

    /// A search text was empty or whitespace only
    #[error("Search text cannot be empty")]
    EmptySearchText,

    /// Coordinates outside the valid latitude/longitude range
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// A temperature unit string that is neither Celsius nor Fahrenheit
    #[error("Invalid temperature unit: {0}")]
    InvalidTemperatureUnit(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create a generic validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}
