//! In-memory stand-ins for the package and region stores.
//!
//! Each fake holds every row, active or not, and answers `list_active` the
//! way the Postgres query does: active rows only, ordered by id.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::core::error::{AppError, Result};
use crate::features::packages::models::Package;
use crate::features::packages::PackageStore;
use crate::features::regions::models::Region;
use crate::features::regions::RegionStore;

pub fn package(id: i32, name: &str, price: i64, is_active: bool) -> Package {
    Package {
        id,
        name: name.to_string(),
        price,
        is_active,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn region(id: i32, name: &str, parent_id: Option<i32>, is_active: bool) -> Region {
    Region {
        id,
        name: name.to_string(),
        parent_id,
        is_active,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn unavailable() -> AppError {
    AppError::Database(sqlx::Error::PoolTimedOut)
}

pub struct FakePackageStore {
    rows: Mutex<Vec<Package>>,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl FakePackageStore {
    pub fn new(rows: Vec<Package>) -> Self {
        Self {
            rows: Mutex::new(rows),
            calls: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
        }
    }

    /// Number of `list_active` queries issued so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn deactivate(&self, id: i32) {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|p| p.id == id) {
            row.is_active = false;
        }
    }
}

#[async_trait]
impl PackageStore for FakePackageStore {
    async fn list_active(&self) -> Result<Vec<Package>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(unavailable());
        }

        let mut active: Vec<Package> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.is_active)
            .cloned()
            .collect();
        active.sort_by_key(|p| p.id);
        Ok(active)
    }
}

pub struct FakeRegionStore {
    rows: Mutex<Vec<Region>>,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl FakeRegionStore {
    pub fn new(rows: Vec<Region>) -> Self {
        Self {
            rows: Mutex::new(rows),
            calls: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
        }
    }

    /// Number of `list_active` queries issued so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn deactivate(&self, id: i32) {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|r| r.id == id) {
            row.is_active = false;
        }
    }
}

#[async_trait]
impl RegionStore for FakeRegionStore {
    async fn list_active(&self) -> Result<Vec<Region>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(unavailable());
        }

        let mut active: Vec<Region> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.is_active)
            .cloned()
            .collect();
        active.sort_by_key(|r| r.id);
        Ok(active)
    }
}
