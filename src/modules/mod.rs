//! Modules layer - Infrastructure components for external integrations
//!
//! Contains adapters for external services such as the response cache.

pub mod cache;
