//! Session cache port definition
//!
//! A flat key-value store whose lifetime is the session. Entries are whole
//! values: a write replaces any previous value under the key and nothing
//! expires on its own.

use async_trait::async_trait;

use crate::error::ApplicationError;

/// Session cache port for storing and retrieving fetched payloads
///
/// Implementations should be thread-safe and support async operations.
/// Values are stored as raw bytes - callers handle serialization.
#[async_trait]
pub trait SessionCachePort: Send + Sync + std::fmt::Debug {
    /// Get a cached value by key
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, ApplicationError>;

    /// Store a value, replacing any existing one
    async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), ApplicationError>;

    /// Remove a single entry
    async fn remove(&self, key: &str) -> Result<(), ApplicationError>;

    /// Get cache statistics (hits, misses, size)
    fn stats(&self) -> CacheStats;
}

/// Extension trait for typed cache operations
///
/// Provides convenient typed get/set methods on top of the raw byte interface.
#[async_trait]
pub trait SessionCacheExt: SessionCachePort {
    /// Get a typed value from cache
    async fn get<T>(&self, key: &str) -> Result<Option<T>, ApplicationError>
    where
        T: serde::de::DeserializeOwned + Send,
    {
        match self.get_bytes(key).await? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes).map_err(|e| {
                    ApplicationError::Cache(format!("Cache deserialization error: {e}"))
                })?;
                Ok(Some(value))
            },
            None => Ok(None),
        }
    }

    /// Set a typed value in cache
    async fn set<T>(&self, key: &str, value: &T) -> Result<(), ApplicationError>
    where
        T: serde::Serialize + Send + Sync,
    {
        let bytes = serde_json::to_vec(value)
            .map_err(|e| ApplicationError::Cache(format!("Cache serialization error: {e}")))?;
        self.set_bytes(key, bytes).await
    }
}

// Blanket implementation for all SessionCachePort implementors
impl<T: SessionCachePort + ?Sized> SessionCacheExt for T {}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Current number of entries
    pub entries: u64,
}

impl CacheStats {
    /// Calculate the hit rate as a fraction (0.0 - 1.0)
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemorySessionCache;

    #[test]
    fn cache_stats_hit_rate_zero_when_empty() {
        let stats = CacheStats::default();
        assert!(stats.hit_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn cache_stats_hit_rate_calculates_correctly() {
        let stats = CacheStats {
            hits: 75,
            misses: 25,
            entries: 100,
        };
        assert!((stats.hit_rate() - 0.75).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn typed_roundtrip_through_bytes() {
        let cache = InMemorySessionCache::default();
        cache.set("k", &vec![1_u32, 2, 3]).await.unwrap();
        let back: Option<Vec<u32>> = cache.get("k").await.unwrap();
        assert_eq!(back, Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn undecodable_entry_is_cache_error() {
        let cache = InMemorySessionCache::default();
        cache.set_bytes("k", b"not json".to_vec()).await.unwrap();
        let result = cache.get::<Vec<u32>>("k").await;
        assert!(matches!(result, Err(ApplicationError::Cache(_))));
    }

    #[tokio::test]
    async fn set_replaces_whole_entry() {
        let cache = InMemorySessionCache::default();
        cache.set("k", &"first").await.unwrap();
        cache.set("k", &"second").await.unwrap();
        let back: Option<String> = cache.get("k").await.unwrap();
        assert_eq!(back.as_deref(), Some("second"));
    }
}
