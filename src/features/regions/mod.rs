//! Administrative regions feature.
//!
//! Serves the active regions as a two-level tree: top-level regions
//! (시/도, provinces and metropolitan cities) with their child regions
//! (시/군/구) nested underneath. The tree is cached for the configured TTL.
//!
//! ## Data Hierarchy
//!
//! - Level 1: Top-level regions (`parent_id IS NULL`)
//! - Level 2: Child regions (`parent_id` references a top-level region)
//!
//! Active child regions whose parent is missing, inactive or itself a child
//! are left out of the tree.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/regions` | No | Region tree ordered by id |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod stores;

pub use services::RegionService;
pub use stores::{PgRegionStore, RegionStore};
