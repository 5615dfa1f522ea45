//! Location query value object
//!
//! The canonical string form of a resolved location, accepted verbatim by
//! the upstream weather API: either `"<lat>,<lon>"` or a free-text place
//! composite such as `"Accra, Greater Accra, Ghana"`.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::LocationQuery;
//!
//! let query = LocationQuery::new("London").expect("non-empty query");
//! assert_eq!(query.as_str(), "London");
//!
//! assert!(LocationQuery::new("   ").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A non-empty location query string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocationQuery(String);

impl LocationQuery {
    /// Create a new location query
    ///
    /// The value is kept as given; only blank input is rejected.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyLocationQuery` if the value is empty or
    /// consists only of whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::EmptyLocationQuery);
        }
        Ok(Self(value))
    }

    /// Wrap a value that is non-blank by construction
    pub(crate) const fn from_trusted(value: String) -> Self {
        Self(value)
    }

    /// Get the query as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the query and return the inner string
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LocationQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LocationQuery {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LocationQuery> for String {
    fn from(query: LocationQuery) -> Self {
        query.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_place_name() {
        let q = LocationQuery::new("Accra, Greater Accra, Ghana").unwrap();
        assert_eq!(q.as_str(), "Accra, Greater Accra, Ghana");
    }

    #[test]
    fn accepts_coordinate_pair() {
        let q = LocationQuery::new("5.6037,-0.187").unwrap();
        assert_eq!(q.to_string(), "5.6037,-0.187");
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(LocationQuery::new(""), Err(DomainError::EmptyLocationQuery));
    }

    #[test]
    fn rejects_whitespace_only() {
        assert_eq!(
            LocationQuery::new(" \t "),
            Err(DomainError::EmptyLocationQuery)
        );
    }

    #[test]
    fn keeps_value_untrimmed() {
        let q = LocationQuery::new(" Paris").unwrap();
        assert_eq!(q.as_str(), " Paris");
    }

    #[test]
    fn serializes_as_plain_string() {
        let q = LocationQuery::new("London").unwrap();
        assert_eq!(serde_json::to_string(&q).unwrap(), "\"London\"");
    }

    #[test]
    fn deserialization_validates() {
        let ok: LocationQuery = serde_json::from_str("\"Berlin\"").unwrap();
        assert_eq!(ok.as_str(), "Berlin");

        let err = serde_json::from_str::<LocationQuery>("\"\"");
        assert!(err.is_err());
    }

    #[test]
    fn into_inner_returns_value() {
        let q = LocationQuery::new("Oslo").unwrap();
        assert_eq!(q.into_inner(), "Oslo");
    }
}
