use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::packages::models::Package;

/// Response DTO for a package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PackageResponseDto {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Basic")]
    pub name: String,
    #[schema(example = 10000)]
    pub price: i64,
}

impl From<Package> for PackageResponseDto {
    fn from(package: Package) -> Self {
        Self {
            id: package.id,
            name: package.name,
            price: package.price,
        }
    }
}
