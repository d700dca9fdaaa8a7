use std::sync::Arc;

use crate::core::error::Result;
use crate::features::regions::dtos::RegionTreeDto;
use crate::features::regions::stores::RegionStore;
use crate::modules::cache::ResponseCache;
use crate::shared::constants::REGIONS_CACHE_KEY;

/// Service for the cached region tree
pub struct RegionService {
    store: Arc<dyn RegionStore>,
    cache: ResponseCache,
}

impl RegionService {
    pub fn new(store: Arc<dyn RegionStore>, cache: ResponseCache) -> Self {
        Self { store, cache }
    }

    /// Active regions grouped under their top-level region.
    ///
    /// Served from cache while the entry is fresh. Store failures are
    /// returned as-is and leave the cache untouched.
    pub async fn get_regions(&self) -> Result<Vec<RegionTreeDto>> {
        if let Some(cached) = self
            .cache
            .get::<Vec<RegionTreeDto>>(REGIONS_CACHE_KEY)
            .await
        {
            return Ok(cached);
        }

        let regions = self.store.list_active().await?;
        let tree = RegionTreeDto::build_tree(regions);

        self.cache.put(REGIONS_CACHE_KEY, &tree).await;
        tracing::debug!("Cached region tree with {} top-level regions", tree.len());

        Ok(tree)
    }
}
