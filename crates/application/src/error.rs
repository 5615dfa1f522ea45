//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Message shown when the primary weather load fails
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load weather. Please retry.";

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Required configuration missing or invalid
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Credential rejected upstream
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// Upstream could not find the requested location
    #[error("Not found: {0}")]
    NotFound(String),

    /// Primary weather load failed; the upstream cause is only logged
    #[error("{0}")]
    Fetch(String),

    /// Session cache failure
    #[error("Cache error: {0}")]
    Cache(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// The generic fetch failure surfaced to users
    #[must_use]
    pub fn fetch_failed() -> Self {
        Self::Fetch(FETCH_FAILED_MESSAGE.to_string())
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApplicationError::RateLimited
                | ApplicationError::ExternalService(_)
                | ApplicationError::Fetch(_)
        )
    }
}
