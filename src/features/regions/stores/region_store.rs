use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::Region;

/// Read access to persisted regions
#[async_trait]
pub trait RegionStore: Send + Sync {
    /// All regions with `is_active = TRUE`, ordered by id ascending
    async fn list_active(&self) -> Result<Vec<Region>>;
}

/// Postgres-backed region store
pub struct PgRegionStore {
    pool: PgPool,
}

impl PgRegionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegionStore for PgRegionStore {
    async fn list_active(&self) -> Result<Vec<Region>> {
        sqlx::query_as::<_, Region>(
            r#"
            SELECT id, name, parent_id, is_active, created_at, updated_at
            FROM regions
            WHERE is_active = TRUE
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list active regions: {:?}", e);
            AppError::Database(e)
        })
    }
}
