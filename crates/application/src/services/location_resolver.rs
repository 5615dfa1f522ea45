//! Location resolution
//!
//! Turns a device geolocation fix or a user's search pick into the single
//! canonical query string the weather API accepts.

use domain::value_objects::{GeoCoordinates, LocationQuery, SearchSelection};

/// Resolves the active location source into a [`LocationQuery`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationResolver;

impl LocationResolver {
    /// Resolve a query from an optional fix and an optional search selection
    ///
    /// A selection always wins over coordinates. Coordinates are formatted as
    /// `"<lat>,<lon>"` without rounding. With neither input, or with a
    /// selection whose label is blank, there is nothing to fetch and `None`
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use application::services::LocationResolver;
    /// use domain::value_objects::{GeoCoordinates, SearchSelection};
    ///
    /// let geo = GeoCoordinates::new(5.6037, -0.187).ok();
    /// let pick = SearchSelection::new("Accra").with_country("Ghana");
    ///
    /// let q = LocationResolver::resolve(geo, Some(&pick)).unwrap();
    /// assert_eq!(q.as_str(), "Accra, Ghana");
    ///
    /// let q = LocationResolver::resolve(geo, None).unwrap();
    /// assert_eq!(q.as_str(), "5.6037,-0.187");
    ///
    /// assert!(LocationResolver::resolve(None, None).is_none());
    /// ```
    #[must_use]
    pub fn resolve(
        geo: Option<GeoCoordinates>,
        selection: Option<&SearchSelection>,
    ) -> Option<LocationQuery> {
        match (selection, geo) {
            (Some(selection), _) => selection.to_query(),
            (None, Some(coords)) => Some(coords.to_query()),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn selection_overrides_coordinates() {
        let geo = GeoCoordinates::new(51.5, -0.12).ok();
        let pick = SearchSelection::new("Accra")
            .with_region("Greater Accra")
            .with_country("Ghana");
        let q = LocationResolver::resolve(geo, Some(&pick)).unwrap();
        assert_eq!(q.as_str(), "Accra, Greater Accra, Ghana");
    }

    #[test]
    fn coordinates_alone_keep_precision() {
        let geo = GeoCoordinates::new(5.603_716_8, -0.186_964_4).ok();
        let q = LocationResolver::resolve(geo, None).unwrap();
        assert_eq!(q.as_str(), "5.6037168,-0.1869644");
    }

    #[test]
    fn nothing_resolves_to_none() {
        assert!(LocationResolver::resolve(None, None).is_none());
    }

    #[test]
    fn blank_selection_resolves_to_none_even_with_coordinates() {
        let geo = GeoCoordinates::new(1.0, 2.0).ok();
        let pick = SearchSelection::new(" ");
        assert!(LocationResolver::resolve(geo, Some(&pick)).is_none());
    }

    #[test]
    fn selection_with_empty_name_is_permitted() {
        let pick = SearchSelection::new("").with_country("Ghana");
        let q = LocationResolver::resolve(None, Some(&pick)).unwrap();
        assert_eq!(q.as_str(), ", Ghana");
    }

    proptest! {
        #[test]
        fn override_dominates_any_geo(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64,
            name in "[A-Za-z]{1,12}",
            country in proptest::option::of("[A-Za-z]{1,12}"),
        ) {
            let mut pick = SearchSelection::new(name);
            pick.country = country;
            let with_geo = LocationResolver::resolve(GeoCoordinates::new(lat, lon).ok(), Some(&pick));
            let without_geo = LocationResolver::resolve(None, Some(&pick));
            prop_assert_eq!(with_geo.clone(), without_geo);
            prop_assert_eq!(with_geo, pick.to_query());
        }

        #[test]
        fn coordinates_format_without_rounding(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64,
        ) {
            let q = LocationResolver::resolve(GeoCoordinates::new(lat, lon).ok(), None).unwrap();
            prop_assert_eq!(q.into_inner(), format!("{lat},{lon}"));
        }
    }
}
