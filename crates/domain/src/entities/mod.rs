//! Domain entities - fetched snapshots and search results

mod astronomy;
mod forecast;
mod photo;
mod suggestion;
mod weather;

pub use astronomy::AstronomySnapshot;
pub use forecast::{ForecastDay, ForecastSet, HourlyEntry};
pub use photo::{Photo, PhotoSources};
pub use suggestion::LocationSuggestion;
pub use weather::{Condition, CurrentConditions, LocationInfo, WeatherSnapshot};
