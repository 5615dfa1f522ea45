//! Moka in-memory session cache
//!
//! Thread-safe map that lives as long as the process. The cache is built
//! without a capacity bound or expiry, so nothing is evicted: an entry
//! lasts until it is overwritten, removed or the session ends. A write
//! replaces the previous value atomically.

use std::sync::atomic::{AtomicU64, Ordering};

use application::{
    error::ApplicationError,
    ports::{CacheStats, SessionCachePort},
};
use async_trait::async_trait;
use moka::future::Cache;
use tracing::{debug, instrument};

/// Moka-based session cache
pub struct MokaSessionCache {
    cache: Cache<String, Vec<u8>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl std::fmt::Debug for MokaSessionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaSessionCache")
            .field("entries", &self.cache.entry_count())
            .field("hits", &self.hits.load(Ordering::Relaxed))
            .field("misses", &self.misses.load(Ordering::Relaxed))
            .finish()
    }
}

impl MokaSessionCache {
    /// Create an empty, unbounded session cache
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: Cache::builder().build(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }
}

impl Default for MokaSessionCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionCachePort for MokaSessionCache {
    #[instrument(skip(self), level = "debug")]
    #[allow(clippy::option_if_let_else)]
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, ApplicationError> {
        if let Some(bytes) = self.cache.get(key).await {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(key = %key, "Cache hit");
            Ok(Some(bytes))
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            debug!(key = %key, "Cache miss");
            Ok(None)
        }
    }

    #[instrument(skip(self, value), level = "debug")]
    async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), ApplicationError> {
        self.cache.insert(key.to_string(), value).await;
        debug!(key = %key, "Cache set");
        Ok(())
    }

    #[instrument(skip(self), level = "debug")]
    async fn remove(&self, key: &str) -> Result<(), ApplicationError> {
        self.cache.invalidate(key).await;
        debug!(key = %key, "Cache entry removed");
        Ok(())
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.cache.entry_count(),
        }
    }
}
