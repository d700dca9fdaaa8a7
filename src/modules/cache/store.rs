use std::time::Duration;

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache backend error: {0}")]
    Backend(String),

    #[error("Failed to encode cache value: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl From<redis::RedisError> for CacheError {
    fn from(err: redis::RedisError) -> Self {
        CacheError::Backend(err.to_string())
    }
}

/// Key-value store holding serialized responses with a per-entry expiry.
///
/// Implementations must never return a value after its TTL has elapsed.
/// A `put` overwrites any existing entry for the same key.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    async fn put(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError>;

    /// Short backend name used in logs
    fn backend_name(&self) -> &'static str;
}
