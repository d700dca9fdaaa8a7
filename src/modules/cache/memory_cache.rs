use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::Instant;

use super::store::{CacheError, CacheStore};

struct CacheEntry {
    value: Vec<u8>,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// In-process cache with passive expiry: stale entries are dropped when read.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if entry.is_live(Instant::now()) => {
                    return Ok(Some(entry.value.clone()));
                }
                Some(_) => {}
                None => return Ok(None),
            }
        }

        // Expired - evict unless a concurrent put already refreshed it
        let mut entries = self.entries.write().await;
        if entries
            .get(key)
            .is_some_and(|entry| !entry.is_live(Instant::now()))
        {
            entries.remove(key);
        }

        Ok(None)
    }

    async fn put(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError> {
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + ttl,
        };
        self.entries.write().await.insert(key.to_string(), entry);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
