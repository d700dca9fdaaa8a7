//! Package catalogue feature.
//!
//! Serves the list of purchasable packages. The listing is read-only and
//! cached for the configured TTL (1 hour by default), so price or activation
//! changes become visible once the cached entry expires.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/packages` | No | List active packages ordered by id |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod stores;

pub use services::PackageService;
pub use stores::{PackageStore, PgPackageStore};
