use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::regions::dtos::RegionTreeDto;
use crate::features::regions::services::RegionService;
use crate::shared::types::{ApiResponse, Meta};

/// List active regions as a tree of top-level regions and their children
#[utoipa::path(
    get,
    path = "/api/regions",
    responses(
        (status = 200, description = "Region tree", body = ApiResponse<Vec<RegionTreeDto>>),
        (status = 500, description = "Region store unavailable")
    ),
    tag = "regions"
)]
pub async fn list_regions(
    State(service): State<Arc<RegionService>>,
) -> Result<Json<ApiResponse<Vec<RegionTreeDto>>>> {
    let regions = service.get_regions().await?;
    let meta = Meta::for_list(&regions);
    Ok(Json(ApiResponse::success(Some(regions), None, Some(meta))))
}
