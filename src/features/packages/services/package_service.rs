use std::sync::Arc;

use crate::core::error::Result;
use crate::features::packages::dtos::PackageResponseDto;
use crate::features::packages::stores::PackageStore;
use crate::modules::cache::ResponseCache;
use crate::shared::constants::PACKAGES_CACHE_KEY;

/// Service for the cached package listing
pub struct PackageService {
    store: Arc<dyn PackageStore>,
    cache: ResponseCache,
}

impl PackageService {
    pub fn new(store: Arc<dyn PackageStore>, cache: ResponseCache) -> Self {
        Self { store, cache }
    }

    /// List active packages, served from cache while the entry is fresh.
    ///
    /// Store failures are returned as-is and leave the cache untouched.
    pub async fn get_packages(&self) -> Result<Vec<PackageResponseDto>> {
        if let Some(cached) = self
            .cache
            .get::<Vec<PackageResponseDto>>(PACKAGES_CACHE_KEY)
            .await
        {
            return Ok(cached);
        }

        let packages = self.store.list_active().await?;
        let dtos: Vec<PackageResponseDto> = packages.into_iter().map(Into::into).collect();

        self.cache.put(PACKAGES_CACHE_KEY, &dtos).await;
        tracing::debug!("Cached {} active packages", dtos.len());

        Ok(dtos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CacheConfig;
    use crate::core::error::AppError;
    use crate::features::packages::models::Package;
    use crate::modules::cache::MemoryCache;
    use crate::shared::test_helpers::{package, FakePackageStore};
    use async_trait::async_trait;
    use std::time::Duration;

    fn service_with(store: Arc<FakePackageStore>) -> PackageService {
        let cache = ResponseCache::new(Arc::new(MemoryCache::new()), &CacheConfig::default());
        PackageService::new(store, cache)
    }

    fn dto(id: i32, name: &str, price: i64) -> PackageResponseDto {
        PackageResponseDto {
            id,
            name: name.to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn test_only_active_packages_are_returned() {
        let store = Arc::new(FakePackageStore::new(vec![
            package(1, "Basic", 10000, true),
            package(2, "Old", 5000, false),
        ]));
        let service = service_with(store);

        let packages = service.get_packages().await.unwrap();

        assert_eq!(packages, vec![dto(1, "Basic", 10000)]);
    }

    /// Returns rows exactly as given, without filtering or sorting
    struct AsIsStore(Vec<Package>);

    #[async_trait]
    impl PackageStore for AsIsStore {
        async fn list_active(&self) -> Result<Vec<Package>> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_packages_keep_store_order() {
        // Ordering is the store's job; the service must not reshuffle it
        let store = Arc::new(AsIsStore(vec![
            package(3, "Premium", 30000, true),
            package(1, "Basic", 10000, true),
            package(2, "Standard", 20000, true),
        ]));
        let cache = ResponseCache::new(Arc::new(MemoryCache::new()), &CacheConfig::default());
        let service = PackageService::new(store, cache);

        let ids: Vec<i32> = service
            .get_packages()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();

        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_call_within_ttl_hits_cache() {
        let store = Arc::new(FakePackageStore::new(vec![package(1, "Basic", 10000, true)]));
        let service = service_with(store.clone());

        let first = service.get_packages().await.unwrap();
        tokio::time::advance(Duration::from_secs(30 * 60)).await;
        let second = service.get_packages().await.unwrap();

        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
        assert_eq!(store.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_entry_is_refetched_and_reflects_deactivation() {
        let store = Arc::new(FakePackageStore::new(vec![
            package(1, "Basic", 10000, true),
            package(2, "Standard", 20000, true),
        ]));
        let service = service_with(store.clone());

        assert_eq!(service.get_packages().await.unwrap().len(), 2);

        store.deactivate(2);
        // Still served from cache
        assert_eq!(service.get_packages().await.unwrap().len(), 2);

        tokio::time::advance(Duration::from_secs(3600)).await;
        let packages = service.get_packages().await.unwrap();

        assert_eq!(packages, vec![dto(1, "Basic", 10000)]);
        assert_eq!(store.calls(), 2);
    }

    #[tokio::test]
    async fn test_store_failure_is_returned_and_not_cached() {
        let store = Arc::new(FakePackageStore::new(vec![package(1, "Basic", 10000, true)]));
        let service = service_with(store.clone());

        store.set_failing(true);
        let result = service.get_packages().await;
        assert!(matches!(result, Err(AppError::Database(_))));

        store.set_failing(false);
        let packages = service.get_packages().await.unwrap();

        assert_eq!(packages, vec![dto(1, "Basic", 10000)]);
        assert_eq!(store.calls(), 2);
    }

    #[tokio::test]
    async fn test_empty_listing_is_cached() {
        let store = Arc::new(FakePackageStore::new(vec![]));
        let service = service_with(store.clone());

        assert!(service.get_packages().await.unwrap().is_empty());
        assert!(service.get_packages().await.unwrap().is_empty());
        assert_eq!(store.calls(), 1);
    }
}
