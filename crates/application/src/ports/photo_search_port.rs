//! Photo search port
//!
//! Defines the interface for illustrative stock photo lookup.

use async_trait::async_trait;
use domain::entities::Photo;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for photo search operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PhotoSearchPort: Send + Sync {
    /// Search photos for a query, returning at most `per_page` results
    async fn search_photos(
        &self,
        query: &str,
        per_page: u32,
    ) -> Result<Vec<Photo>, ApplicationError>;
}
