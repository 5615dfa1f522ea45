//! Illustrative photos for the weather view
//!
//! Queries are tried in order as fallback tiers until one returns photos.
//! Nothing here can fail the weather view: errors are logged and an empty
//! list is a normal result.

use std::{fmt, sync::Arc};

use domain::entities::Photo;
use tracing::{debug, instrument, warn};

use crate::ports::{PhotoSearchPort, SessionCacheExt, SessionCachePort};

/// Prefix of photo cache keys
pub const PHOTO_CACHE_PREFIX: &str = "pexels_cache_";

/// Default number of photos requested per tier
pub const DEFAULT_PHOTOS_PER_PAGE: u32 = 5;

/// Cache key for one photo query
#[must_use]
pub fn photo_cache_key(query: &str, per_page: u32) -> String {
    format!("{PHOTO_CACHE_PREFIX}{query}_{per_page}")
}

/// Fallback query tiers for a condition at a location
///
/// # Examples
///
/// ```
/// use application::services::weather_image_queries;
///
/// let tiers = weather_image_queries("Light rain", "Accra");
/// assert_eq!(tiers[0], "Light rain");
/// assert_eq!(tiers[1], "Light rain weather");
/// assert_eq!(tiers.last().map(String::as_str), Some("weather"));
/// ```
#[must_use]
pub fn weather_image_queries(condition: &str, location_name: &str) -> Vec<String> {
    vec![
        condition.to_string(),
        format!("{condition} weather"),
        format!("{location_name} {condition}"),
        format!("{location_name} skyline"),
        format!("weather {location_name}"),
        "weather".to_string(),
    ]
}

/// Best-effort photo lookup over fallback tiers
pub struct ImageDecorator {
    photos: Arc<dyn PhotoSearchPort>,
    cache: Arc<dyn SessionCachePort>,
}

impl fmt::Debug for ImageDecorator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageDecorator").finish_non_exhaustive()
    }
}

impl ImageDecorator {
    /// Create a new decorator
    pub fn new(photos: Arc<dyn PhotoSearchPort>, cache: Arc<dyn SessionCachePort>) -> Self {
        Self { photos, cache }
    }

    /// Fetch photos for the first tier that has any
    ///
    /// Blank queries are skipped. Each tier is served from the session cache
    /// when present; fresh results are written back.
    #[instrument(skip(self, queries))]
    pub async fn fetch_images<I, S>(&self, queries: I, per_page: u32) -> Vec<Photo>
    where
        I: IntoIterator<Item = S> + Send,
        I::IntoIter: Send,
        S: AsRef<str> + Send,
    {
        for query in queries {
            let query = query.as_ref().trim();
            if query.is_empty() {
                continue;
            }
            let photos = self.fetch_tier(query, per_page).await;
            if !photos.is_empty() {
                debug!(query, count = photos.len(), "Photo tier matched");
                return photos;
            }
        }
        debug!("No photos found for any tier");
        Vec::new()
    }

    async fn fetch_tier(&self, query: &str, per_page: u32) -> Vec<Photo> {
        let key = photo_cache_key(query, per_page);

        match self.cache.get::<Vec<Photo>>(&key).await {
            Ok(Some(photos)) => return photos,
            Ok(None) => {},
            Err(e) => warn!(error = %e, key = %key, "Unreadable photo cache entry"),
        }

        match self.photos.search_photos(query, per_page).await {
            Ok(photos) => {
                if let Err(e) = self.cache.set(&key, &photos).await {
                    warn!(error = %e, key = %key, "Failed to store photo cache entry");
                }
                photos
            },
            Err(e) => {
                warn!(error = %e, query, "Photo search failed");
                Vec::new()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use domain::entities::PhotoSources;
    use mockall::Sequence;

    use super::*;
    use crate::{error::ApplicationError, ports::MockPhotoSearchPort, testing::InMemorySessionCache};

    fn photo(id: u64) -> Photo {
        Photo {
            id,
            width: 1200,
            height: 800,
            url: format!("https://www.pexels.com/photo/{id}/"),
            photographer: "Ama".to_string(),
            photographer_url: String::new(),
            avg_color: Some("#7A8B9C".to_string()),
            alt: None,
            src: PhotoSources::default(),
        }
    }

    #[tokio::test]
    async fn falls_through_empty_tiers_and_stops_at_first_hit() {
        let mut port = MockPhotoSearchPort::new();
        let mut seq = Sequence::new();
        port.expect_search_photos()
            .withf(|q, n| q == "Mist" && *n == 5)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(vec![]));
        port.expect_search_photos()
            .withf(|q, _| q == "Mist weather")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(ApplicationError::RateLimited));
        port.expect_search_photos()
            .withf(|q, _| q == "Oslo Mist")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(vec![photo(1), photo(2)]));

        let decorator = ImageDecorator::new(
            Arc::new(port),
            Arc::new(InMemorySessionCache::default()),
        );
        let photos = decorator
            .fetch_images(weather_image_queries("Mist", "Oslo"), 5)
            .await;
        assert_eq!(photos.len(), 2);
    }

    #[tokio::test]
    async fn repeats_are_served_from_cache() {
        let mut port = MockPhotoSearchPort::new();
        port.expect_search_photos()
            .times(1)
            .returning(|_, _| Ok(vec![photo(7)]));

        let cache = Arc::new(InMemorySessionCache::default());
        let decorator = ImageDecorator::new(Arc::new(port), cache.clone());

        let first = decorator.fetch_images(["Sunny"], 5).await;
        let second = decorator.fetch_images(["Sunny"], 5).await;
        assert_eq!(first, second);
        assert!(cache.contains("pexels_cache_Sunny_5"));
    }

    #[tokio::test]
    async fn blank_queries_are_skipped() {
        let mut port = MockPhotoSearchPort::new();
        port.expect_search_photos()
            .withf(|q, _| q == "weather")
            .times(1)
            .returning(|_, _| Ok(vec![photo(3)]));

        let decorator = ImageDecorator::new(
            Arc::new(port),
            Arc::new(InMemorySessionCache::default()),
        );
        let photos = decorator.fetch_images(["", "  ", "weather"], 5).await;
        assert_eq!(photos[0].id, 3);
    }

    #[tokio::test]
    async fn all_tiers_empty_is_not_an_error() {
        let mut port = MockPhotoSearchPort::new();
        port.expect_search_photos().returning(|_, _| Ok(vec![]));

        let decorator = ImageDecorator::new(
            Arc::new(port),
            Arc::new(InMemorySessionCache::default()),
        );
        assert!(decorator
            .fetch_images(weather_image_queries("Sunny", "Lima"), 5)
            .await
            .is_empty());
    }

    #[test]
    fn tiers_follow_fixed_order() {
        let tiers = weather_image_queries("Sunny", "Accra");
        assert_eq!(
            tiers,
            vec![
                "Sunny",
                "Sunny weather",
                "Accra Sunny",
                "Accra skyline",
                "weather Accra",
                "weather"
            ]
        );
    }

    #[test]
    fn cache_key_includes_page_size() {
        assert_eq!(photo_cache_key("rain", 8), "pexels_cache_rain_8");
    }
}
