use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::packages::handlers;
use crate::features::packages::services::PackageService;

/// Create routes for the packages feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<PackageService>) -> Router {
    Router::new()
        .route("/api/packages", get(handlers::list_packages))
        .with_state(service)
}
