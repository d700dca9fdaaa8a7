// =============================================================================
// CACHE DATASET KEYS
// =============================================================================

/// Cache key for the active package listing
pub const PACKAGES_CACHE_KEY: &str = "packages";

/// Cache key for the region tree
pub const REGIONS_CACHE_KEY: &str = "regions";
