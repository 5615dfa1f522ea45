//! Stock photo entity

use serde::{Deserialize, Serialize};

/// Sized renditions of a photo
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoSources {
    pub original: String,
    pub large2x: String,
    pub large: String,
    pub medium: String,
    pub small: String,
    pub portrait: String,
    pub landscape: String,
    pub tiny: String,
}

/// An illustrative photo from the photo-search API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: u64,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    /// Photo page URL
    pub url: String,
    #[serde(default)]
    pub photographer: String,
    #[serde(default)]
    pub photographer_url: String,
    /// Average colour as `#rrggbb`
    #[serde(default)]
    pub avg_color: Option<String>,
    /// Alt text
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub src: PhotoSources,
}

impl Photo {
    /// Alt text, falling back to a photographer credit
    #[must_use]
    pub fn caption(&self) -> String {
        match self.alt.as_deref().filter(|a| !a.trim().is_empty()) {
            Some(alt) => alt.to_string(),
            None => format!("Photo by {}", self.photographer),
        }
    }
}
