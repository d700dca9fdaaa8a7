use utoipa::{Modify, OpenApi};

use crate::features::packages::{dtos as packages_dtos, handlers as packages_handlers};
use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Packages
        packages_handlers::list_packages,
        // Regions
        regions_handlers::list_regions,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Packages
            packages_dtos::PackageResponseDto,
            ApiResponse<Vec<packages_dtos::PackageResponseDto>>,
            // Regions
            regions_dtos::RegionChildDto,
            regions_dtos::RegionTreeDto,
            ApiResponse<Vec<regions_dtos::RegionTreeDto>>,
        )
    ),
    tags(
        (name = "packages", description = "Package catalogue (public)"),
        (name = "regions", description = "Administrative region tree (public)"),
    ),
    info(
        title = "Reference Data API",
        version = "0.1.0",
        description = "Package and region listings",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
