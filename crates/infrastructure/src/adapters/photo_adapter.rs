//! Photo adapter - Implements PhotoSearchPort using integration_pexels

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::PhotoSearchPort;
use async_trait::async_trait;
use domain::entities::{Photo, PhotoSources};
use integration_pexels::{PexelsClient, PexelsConfig, PexelsError, PexelsPhoto, PhotoSearchClient};
use tracing::{debug, instrument};

/// Adapter for Pexels photo search
pub struct PexelsPhotoAdapter {
    client: Arc<dyn PhotoSearchClient>,
}

impl std::fmt::Debug for PexelsPhotoAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PexelsPhotoAdapter")
            .field("client", &"PhotoSearchClient")
            .finish()
    }
}

impl PexelsPhotoAdapter {
    /// Create a new adapter backed by the HTTP client
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails
    /// to initialize.
    pub fn new(config: &PexelsConfig) -> Result<Self, ApplicationError> {
        let client = PexelsClient::new(config).map_err(Self::map_error)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an adapter over any photo search client
    #[must_use]
    pub fn with_client(client: Arc<dyn PhotoSearchClient>) -> Self {
        Self { client }
    }

    fn map_error(err: PexelsError) -> ApplicationError {
        match err {
            PexelsError::ConfigurationError(e) => ApplicationError::Configuration(e),
            PexelsError::AuthenticationFailed(e) => ApplicationError::NotAuthorized(e),
            PexelsError::RateLimitExceeded => ApplicationError::RateLimited,
            PexelsError::InvalidQuery(e) => {
                ApplicationError::Domain(domain::DomainError::validation(e))
            },
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }

    fn map_photo(photo: PexelsPhoto) -> Photo {
        Photo {
            id: photo.id,
            width: photo.width,
            height: photo.height,
            url: photo.url,
            photographer: photo.photographer,
            photographer_url: photo.photographer_url,
            avg_color: photo.avg_color,
            alt: photo.alt.filter(|alt| !alt.is_empty()),
            src: PhotoSources {
                original: photo.src.original,
                large2x: photo.src.large2x,
                large: photo.src.large,
                medium: photo.src.medium,
                small: photo.src.small,
                portrait: photo.src.portrait,
                landscape: photo.src.landscape,
                tiny: photo.src.tiny,
            },
        }
    }
}

#[async_trait]
impl PhotoSearchPort for PexelsPhotoAdapter {
    #[instrument(skip(self))]
    async fn search_photos(
        &self,
        query: &str,
        per_page: u32,
    ) -> Result<Vec<Photo>, ApplicationError> {
        let response = self
            .client
            .search(query, per_page)
            .await
            .map_err(Self::map_error)?;

        debug!(count = response.photos.len(), "Retrieved photos");
        Ok(response.photos.into_iter().map(Self::map_photo).collect())
    }
}
