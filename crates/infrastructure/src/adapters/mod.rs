//! Infrastructure adapters
//!
//! Adapters connect application ports to the HTTP integration clients.

mod photo_adapter;
mod weather_adapter;

pub use photo_adapter::PexelsPhotoAdapter;
pub use weather_adapter::WeatherApiAdapter;
