//! Preference store port
//!
//! Durable string preferences that outlive the session (e.g., the
//! temperature unit).

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for durable user preferences
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PreferenceStorePort: Send + Sync {
    /// Read a preference value
    async fn get(&self, key: &str) -> Result<Option<String>, ApplicationError>;

    /// Write a preference value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> Result<(), ApplicationError>;
}
