use std::sync::Arc;

use axum::{http::StatusCode, middleware::from_fn, routing::get, Router};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::{AppConfig, SwaggerConfig};
use crate::core::error::AppError;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::packages::{routes as packages_routes, PackageService};
use crate::features::regions::{routes as regions_routes, RegionService};

/// Simple health check endpoint
async fn health_check() -> StatusCode {
    StatusCode::OK
}

async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

fn swagger_routes(config: &SwaggerConfig) -> Router {
    let swagger_modifier = SwaggerInfoModifier {
        title: config.title.clone(),
        version: config.version.clone(),
        description: config.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    if let Some(credentials) = config.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        swagger.layer(from_fn(middleware::basic_auth_middleware(Arc::new(
            credentials,
        ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        swagger
    }
}

/// Assemble the full application router with its middleware stack
pub fn build_router(
    package_service: Arc<PackageService>,
    region_service: Arc<RegionService>,
    app_config: &AppConfig,
    swagger_config: &SwaggerConfig,
) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .merge(packages_routes::routes(package_service))
        .merge(regions_routes::routes(region_service));

    Router::new()
        .merge(swagger_routes(swagger_config))
        .merge(public_routes)
        .route("/health", get(health_check))
        .fallback(route_not_found)
        .layer(middleware::cors_layer(
            app_config.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}
