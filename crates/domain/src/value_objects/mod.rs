//! Value Objects - Immutable, identity-less domain primitives

mod geo_coordinates;
mod location_query;
mod search_selection;
mod temperature_unit;
mod uv_level;

pub use geo_coordinates::GeoCoordinates;
pub use location_query::LocationQuery;
pub use search_selection::{ResolvedLocation, SearchSelection};
pub use temperature_unit::TemperatureUnit;
pub use uv_level::UvLevel;
