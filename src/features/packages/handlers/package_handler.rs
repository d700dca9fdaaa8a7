use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::packages::dtos::PackageResponseDto;
use crate::features::packages::services::PackageService;
use crate::shared::types::{ApiResponse, Meta};

/// List all active packages
#[utoipa::path(
    get,
    path = "/api/packages",
    responses(
        (status = 200, description = "List of active packages", body = ApiResponse<Vec<PackageResponseDto>>),
        (status = 500, description = "Package store unavailable")
    ),
    tag = "packages"
)]
pub async fn list_packages(
    State(service): State<Arc<PackageService>>,
) -> Result<Json<ApiResponse<Vec<PackageResponseDto>>>> {
    let packages = service.get_packages().await?;
    let meta = Meta::for_list(&packages);
    Ok(Json(ApiResponse::success(Some(packages), None, Some(meta))))
}
