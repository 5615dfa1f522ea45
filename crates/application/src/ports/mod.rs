//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod photo_search_port;
mod preference_store_port;
mod session_cache_port;
mod weather_port;

#[cfg(test)]
pub use photo_search_port::MockPhotoSearchPort;
pub use photo_search_port::PhotoSearchPort;
#[cfg(test)]
pub use preference_store_port::MockPreferenceStorePort;
pub use preference_store_port::PreferenceStorePort;
pub use session_cache_port::{CacheStats, SessionCacheExt, SessionCachePort};
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::WeatherPort;
