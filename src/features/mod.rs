pub mod packages;
pub mod regions;
