use std::sync::Arc;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};

use super::memory_cache::MemoryCache;
use super::redis_cache::RedisCache;
use super::store::{CacheError, CacheStore};
use crate::core::config::CacheConfig;

/// Pick the cache backend for this process.
///
/// Redis is used when `redis_url` is configured and answers within
/// `op_timeout`; otherwise the in-memory cache. Startup never fails or stalls
/// because of the cache.
pub async fn build_cache_store(config: &CacheConfig) -> Arc<dyn CacheStore> {
    let Some(url) = config.redis_url.as_deref() else {
        tracing::info!("REDIS_URL not set, using in-memory response cache");
        return Arc::new(MemoryCache::new());
    };

    match RedisCache::connect(url, config.op_timeout).await {
        Ok(cache) => {
            tracing::info!("Redis response cache connected");
            Arc::new(cache)
        }
        Err(e) => {
            tracing::warn!(
                "Redis unavailable ({}), falling back to in-memory response cache",
                e
            );
            Arc::new(MemoryCache::new())
        }
    }
}

/// Typed, namespaced view over a [`CacheStore`].
///
/// The cache is an optimization only: every backend or decoding failure is
/// logged and reported to the caller as a miss (`get`) or ignored (`put`).
#[derive(Clone)]
pub struct ResponseCache {
    store: Arc<dyn CacheStore>,
    key_prefix: String,
    ttl: Duration,
}

impl ResponseCache {
    pub fn new(store: Arc<dyn CacheStore>, config: &CacheConfig) -> Self {
        Self {
            store,
            key_prefix: config.key_prefix.clone(),
            ttl: config.ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn namespaced(&self, key: &str) -> String {
        if self.key_prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}:{}", self.key_prefix, key)
        }
    }

    /// Cached value for `key`, or `None` on miss, expiry or cache failure
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let key = self.namespaced(key);

        let bytes = match self.store.get(&key).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                tracing::debug!("Cache miss for {}", key);
                return None;
            }
            Err(e) => {
                tracing::warn!(
                    "Cache read failed for {} on {} backend: {}",
                    key,
                    self.store.backend_name(),
                    e
                );
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => {
                tracing::debug!("Cache hit for {}", key);
                Some(value)
            }
            Err(e) => {
                tracing::warn!("Discarding undecodable cache entry {}: {}", key, e);
                None
            }
        }
    }

    /// Store `value` under `key` for the configured TTL
    pub async fn put<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let key = self.namespaced(key);

        let result = match serde_json::to_vec(value) {
            Ok(bytes) => self.store.put(&key, bytes, self.ttl).await,
            Err(e) => Err(CacheError::from(e)),
        };

        if let Err(e) = result {
            tracing::warn!(
                "Cache write failed for {} on {} backend: {}",
                key,
                self.store.backend_name(),
                e
            );
        }
    }
}
