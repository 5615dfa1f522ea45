//! Pexels response models

use serde::{Deserialize, Serialize};

/// Response of `/v1/search`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PexelsSearchResponse {
    #[serde(default)]
    pub photos: Vec<PexelsPhoto>,
    #[serde(default)]
    pub total_results: u64,
}

/// One photo in a search response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PexelsPhoto {
    pub id: u64,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    pub url: String,
    #[serde(default)]
    pub photographer: String,
    #[serde(default)]
    pub photographer_url: String,
    #[serde(default)]
    pub avg_color: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub src: PexelsPhotoSource,
}

/// Sized renditions of a photo
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PexelsPhotoSource {
    pub original: String,
    pub large2x: String,
    pub large: String,
    pub medium: String,
    pub small: String,
    pub portrait: String,
    pub landscape: String,
    pub tiny: String,
}
