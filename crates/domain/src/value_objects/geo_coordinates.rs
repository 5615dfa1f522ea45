//! Geographic coordinates value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;
use crate::value_objects::LocationQuery;

/// A device geolocation fix with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinates {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

impl GeoCoordinates {
    /// Create new coordinates with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if latitude is not in
    /// [-90, 90], longitude is not in [-180, 180], or either is NaN.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidCoordinates);
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create coordinates without validation (for trusted sources)
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Format as the `"<lat>,<lon>"` query accepted by the weather API
    ///
    /// Uses the shortest representation that round-trips each value, so no
    /// precision is lost.
    #[must_use]
    pub fn to_query(&self) -> LocationQuery {
        LocationQuery::from_trusted(self.to_string())
    }
}

impl fmt::Display for GeoCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_coordinates() {
        let loc = GeoCoordinates::new(52.52, 13.405).unwrap();
        assert!((loc.latitude() - 52.52).abs() < f64::EPSILON);
        assert!((loc.longitude() - 13.405).abs() < f64::EPSILON);
    }

    #[test]
    fn boundary_coordinates() {
        assert!(GeoCoordinates::new(90.0, 180.0).is_ok());
        assert!(GeoCoordinates::new(-90.0, -180.0).is_ok());
        assert!(GeoCoordinates::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn invalid_latitude() {
        assert_eq!(
            GeoCoordinates::new(91.0, 0.0),
            Err(DomainError::InvalidCoordinates)
        );
        assert!(GeoCoordinates::new(-91.0, 0.0).is_err());
    }

    #[test]
    fn invalid_longitude() {
        assert!(GeoCoordinates::new(0.0, 181.0).is_err());
        assert!(GeoCoordinates::new(0.0, -181.0).is_err());
    }

    #[test]
    fn nan_is_rejected() {
        assert!(GeoCoordinates::new(f64::NAN, 0.0).is_err());
        assert!(GeoCoordinates::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn query_keeps_full_precision() {
        let loc = GeoCoordinates::new(5.603_716_8, -0.186_964_4).unwrap();
        assert_eq!(loc.to_query().as_str(), "5.6037168,-0.1869644");
    }

    #[test]
    fn query_has_no_padding() {
        let loc = GeoCoordinates::new(51.5, -0.12).unwrap();
        assert_eq!(loc.to_query().as_str(), "51.5,-0.12");
    }

    #[test]
    fn serialization_roundtrip() {
        let loc = GeoCoordinates::new(52.52, 13.405).unwrap();
        let json = serde_json::to_string(&loc).unwrap();
        assert!(json.contains("52.52"));
        let back: GeoCoordinates = serde_json::from_str(&json).unwrap();
        assert_eq!(loc, back);
    }
}
