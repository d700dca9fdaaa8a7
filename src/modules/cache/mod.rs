//! Response cache for reference data
//!
//! Provides a [`CacheStore`] trait with two backends:
//! - `RedisCache` - shared cache for multi-instance deployments
//! - [`MemoryCache`] - in-process fallback when Redis is not configured or unreachable
//!
//! Features never talk to a backend directly; they go through [`ResponseCache`],
//! which serializes shaped responses and degrades backend failures to misses.

mod memory_cache;
mod redis_cache;
mod response_cache;
mod store;

pub use memory_cache::MemoryCache;
pub use response_cache::{build_cache_store, ResponseCache};
pub use store::{CacheError, CacheStore};
