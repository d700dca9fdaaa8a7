use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, RedisResult};

use super::store::{CacheError, CacheStore};

/// Redis-backed cache. Expiry is delegated to the server via `SET ... EX`.
///
/// Every round trip, the initial connect included, is bounded by `op_timeout`
/// so a stalled server degrades to a cache miss instead of blocking callers.
#[derive(Clone)]
pub struct RedisCache {
    connection: ConnectionManager,
    op_timeout: Duration,
}

async fn bounded<T>(
    op_timeout: Duration,
    operation: &str,
    future: impl Future<Output = RedisResult<T>>,
) -> Result<T, CacheError> {
    match tokio::time::timeout(op_timeout, future).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(CacheError::Backend(format!(
            "Redis {} timed out after {}ms",
            operation,
            op_timeout.as_millis()
        ))),
    }
}

impl RedisCache {
    /// Connect to Redis. Fails if the server cannot be reached or does not
    /// answer within `op_timeout`.
    pub async fn connect(url: &str, op_timeout: Duration) -> Result<Self, CacheError> {
        let client = redis::Client::open(url)?;
        let connection = bounded(op_timeout, "connect", ConnectionManager::new(client)).await?;
        Ok(Self {
            connection,
            op_timeout,
        })
    }
}

#[async_trait]
impl CacheStore for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let mut connection = self.connection.clone();
        bounded(
            self.op_timeout,
            "GET",
            connection.get::<_, Option<Vec<u8>>>(key),
        )
        .await
    }

    async fn put(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError> {
        // EX takes whole seconds and rejects zero
        let ttl_secs = ttl.as_secs().max(1);
        let mut connection = self.connection.clone();
        let mut command = redis::cmd("SET");
        command.arg(key).arg(value).arg("EX").arg(ttl_secs);
        bounded(
            self.op_timeout,
            "SET",
            command.query_async::<_, ()>(&mut connection),
        )
        .await
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
