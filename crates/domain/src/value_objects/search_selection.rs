//! Search selection and resolved location value objects

use serde::{Deserialize, Serialize};

use crate::value_objects::{GeoCoordinates, LocationQuery};

/// A place the user picked from location search results
///
/// Region and country are optional qualifiers; an empty string counts as
/// absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchSelection {
    /// Place name (e.g., "Accra")
    pub name: String,
    /// Region or state (e.g., "Greater Accra")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Country (e.g., "Ghana")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl SearchSelection {
    /// Create a selection with only a place name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            region: None,
            country: None,
        }
    }

    /// Set the region qualifier
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the country qualifier
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Human-readable label: `name`, then `, region`, then `, country`,
    /// trimmed at both ends
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::value_objects::SearchSelection;
    ///
    /// let sel = SearchSelection::new("Accra")
    ///     .with_region("Greater Accra")
    ///     .with_country("Ghana");
    /// assert_eq!(sel.label(), "Accra, Greater Accra, Ghana");
    /// ```
    #[must_use]
    pub fn label(&self) -> String {
        let mut label = self.name.clone();
        for part in [&self.region, &self.country].into_iter().flatten() {
            if !part.is_empty() {
                label.push_str(", ");
                label.push_str(part);
            }
        }
        label.trim().to_string()
    }

    /// Build the location query for this selection
    ///
    /// Returns `None` when every part is blank, since such a selection
    /// cannot name a place.
    #[must_use]
    pub fn to_query(&self) -> Option<LocationQuery> {
        LocationQuery::new(self.label()).ok()
    }
}

/// The single active location source
///
/// A search selection replaces coordinates rather than merging with them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolvedLocation {
    /// A device geolocation fix
    Coordinates(GeoCoordinates),
    /// A user's pick from search results
    Selection(SearchSelection),
}

impl ResolvedLocation {
    /// Build the location query for the active source
    #[must_use]
    pub fn to_query(&self) -> Option<LocationQuery> {
        match self {
            Self::Coordinates(coords) => Some(coords.to_query()),
            Self::Selection(selection) => selection.to_query(),
        }
    }
}

impl From<GeoCoordinates> for ResolvedLocation {
    fn from(coords: GeoCoordinates) -> Self {
        Self::Coordinates(coords)
    }
}

impl From<SearchSelection> for ResolvedLocation {
    fn from(selection: SearchSelection) -> Self {
        Self::Selection(selection)
    }
}
