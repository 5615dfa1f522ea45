//! Pexels photo search integration
//!
//! Client for the Pexels API (<https://www.pexels.com/api/>), used to fetch
//! illustrative photos for weather conditions and places.

mod client;
mod config;
mod error;
mod models;

pub use client::{PexelsClient, PhotoSearchClient};
pub use config::PexelsConfig;
pub use error::PexelsError;
pub use models::{PexelsPhoto, PexelsPhotoSource, PexelsSearchResponse};
