use axum::{
    extract::Request,
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::prelude::*;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

/// Request ID generator using UUID v7 (time-ordered)
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::now_v7().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Custom MakeSpan that includes request_id in the tracing span
#[derive(Clone, Debug)]
pub struct MakeSpanWithRequestId;

impl<B> tower_http::trace::MakeSpan<B> for MakeSpanWithRequestId {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

pub fn cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    // Read-only API
    let cors = CorsLayer::new()
        .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
        .allow_headers(Any);

    // If origins list contains "*", allow any origin
    if allowed_origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

/// Basic auth guard for the Swagger UI, compared against "username:password"
pub fn basic_auth_middleware(
    valid_credentials: Arc<String>,
) -> impl Fn(
    Request,
    Next,
)
    -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, Response>> + Send>>
       + Clone {
    move |req: Request, next: Next| {
        let credentials = valid_credentials.clone();
        Box::pin(async move {
            let authorized = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|header| header.to_str().ok())
                .and_then(|value| value.strip_prefix("Basic "))
                .and_then(|encoded| BASE64_STANDARD.decode(encoded).ok())
                .and_then(|decoded| String::from_utf8(decoded).ok())
                .is_some_and(|creds| creds == *credentials);

            if authorized {
                return Ok(next.run(req).await);
            }

            Err((
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Basic realm=\"Swagger UI\"")],
                "Unauthorized",
            )
                .into_response())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{middleware::from_fn, routing::get, Router};
    use axum_test::TestServer;

    fn guarded_router() -> Router {
        Router::new()
            .route("/docs", get(|| async { "docs" }))
            .layer(from_fn(basic_auth_middleware(Arc::new(
                "admin:secret".to_string(),
            ))))
    }

    #[tokio::test]
    async fn test_basic_auth_rejects_missing_header() {
        let server = TestServer::new(guarded_router()).unwrap();

        let response = server.get("/docs").await;

        response.assert_status_unauthorized();
        assert_eq!(
            response.header(header::WWW_AUTHENTICATE),
            "Basic realm=\"Swagger UI\""
        );
    }

    #[tokio::test]
    async fn test_basic_auth_rejects_wrong_credentials() {
        let server = TestServer::new(guarded_router()).unwrap();
        let encoded = BASE64_STANDARD.encode("admin:wrong");

        let response = server
            .get("/docs")
            .add_header(
                header::AUTHORIZATION,
                HeaderValue::from_str(&format!("Basic {}", encoded)).unwrap(),
            )
            .await;

        response.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_basic_auth_accepts_valid_credentials() {
        let server = TestServer::new(guarded_router()).unwrap();
        let encoded = BASE64_STANDARD.encode("admin:secret");

        let response = server
            .get("/docs")
            .add_header(
                header::AUTHORIZATION,
                HeaderValue::from_str(&format!("Basic {}", encoded)).unwrap(),
            )
            .await;

        response.assert_status_ok();
        response.assert_text("docs");
    }
}
