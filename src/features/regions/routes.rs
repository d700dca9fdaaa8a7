use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionService;

/// Create routes for the regions feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<RegionService>) -> Router {
    Router::new()
        .route("/api/regions", get(handlers::list_regions))
        .with_state(service)
}
