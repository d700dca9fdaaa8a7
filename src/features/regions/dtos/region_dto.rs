use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::regions::models::Region;

/// Child region nested under its top-level region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RegionChildDto {
    #[schema(example = 2)]
    pub id: i32,
    #[schema(example = "Gangnam")]
    pub name: String,
}

/// Top-level region with its children (always present, possibly empty)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RegionTreeDto {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Seoul")]
    pub name: String,
    pub children: Vec<RegionChildDto>,
}

impl RegionTreeDto {
    /// Build the two-level tree from a flat list of regions.
    ///
    /// Top-level nodes and children keep the order of the input. Children whose
    /// `parent_id` does not match a top-level region in the input are dropped.
    pub fn build_tree(regions: Vec<Region>) -> Vec<RegionTreeDto> {
        let mut roots: Vec<RegionTreeDto> = Vec::new();
        let mut root_index: HashMap<i32, usize> = HashMap::new();
        let mut children: Vec<(i32, RegionChildDto)> = Vec::new();

        for region in regions {
            match region.parent_id {
                None => {
                    root_index.insert(region.id, roots.len());
                    roots.push(RegionTreeDto {
                        id: region.id,
                        name: region.name,
                        children: Vec::new(),
                    });
                }
                Some(parent_id) => children.push((
                    parent_id,
                    RegionChildDto {
                        id: region.id,
                        name: region.name,
                    },
                )),
            }
        }

        let mut orphans = 0usize;
        for (parent_id, child) in children {
            match root_index.get(&parent_id) {
                Some(&index) => roots[index].children.push(child),
                None => orphans += 1,
            }
        }

        if orphans > 0 {
            tracing::warn!(
                "Dropped {} region(s) without an active top-level parent",
                orphans
            );
        }

        roots
    }
}
