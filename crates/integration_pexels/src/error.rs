//! Pexels error types

use thiserror::Error;

/// Errors that can occur during photo search
#[derive(Debug, Error)]
pub enum PexelsError {
    /// Connection to the photo service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Search query is empty
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// API key is missing or invalid
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl PexelsError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::ServiceUnavailable(_)
                | Self::Timeout { .. }
                | Self::RateLimitExceeded
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(PexelsError::RateLimitExceeded.is_retryable());
        assert!(PexelsError::Timeout { timeout_secs: 15 }.is_retryable());
        assert!(!PexelsError::AuthenticationFailed("bad key".into()).is_retryable());
        assert!(!PexelsError::InvalidQuery("empty".into()).is_retryable());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            PexelsError::Timeout { timeout_secs: 15 }.to_string(),
            "Request timed out after 15 seconds"
        );
    }
}
