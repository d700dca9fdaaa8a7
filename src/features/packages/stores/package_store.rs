use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::packages::models::Package;

/// Read access to persisted packages
#[async_trait]
pub trait PackageStore: Send + Sync {
    /// All packages with `is_active = TRUE`, ordered by id ascending
    async fn list_active(&self) -> Result<Vec<Package>>;
}

/// Postgres-backed package store
pub struct PgPackageStore {
    pool: PgPool,
}

impl PgPackageStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PackageStore for PgPackageStore {
    async fn list_active(&self) -> Result<Vec<Package>> {
        sqlx::query_as::<_, Package>(
            r#"
            SELECT id, name, price, is_active, created_at, updated_at
            FROM packages
            WHERE is_active = TRUE
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list active packages: {:?}", e);
            AppError::Database(e)
        })
    }
}
