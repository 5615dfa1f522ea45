//! Location search suggestion entity

use serde::{Deserialize, Serialize};

use crate::value_objects::SearchSelection;

/// A candidate returned by location search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSuggestion {
    /// Upstream id
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    /// Upstream slug
    #[serde(default)]
    pub url: Option<String>,
}

impl LocationSuggestion {
    /// Create a suggestion from its display parts
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        region: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            region: region.into(),
            country: country.into(),
            lat: None,
            lon: None,
            url: None,
        }
    }

    /// Convert into the selection used for location resolution
    ///
    /// Empty region or country become absent.
    #[must_use]
    pub fn to_selection(&self) -> SearchSelection {
        SearchSelection {
            name: self.name.clone(),
            region: Some(self.region.clone()).filter(|r| !r.is_empty()),
            country: Some(self.country.clone()).filter(|c| !c.is_empty()),
        }
    }

    /// Display label, joined the same way as the resolved query
    #[must_use]
    pub fn label(&self) -> String {
        self.to_selection().label()
    }
}
