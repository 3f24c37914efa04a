//! HTTP adapters - the server's REST surface.
//!
//! Only the forms relay is served from this crate; everything else is a
//! client of the backend API.

pub mod forms;

use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ServerConfig;

pub use forms::{forms_router, FormsAppState};

/// The full application router with tracing, CORS and timeout layers.
pub fn app_router(state: FormsAppState, server: &ServerConfig) -> Router {
    forms_router()
        .with_state(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TraceLayer::new_for_http())
}

/// Any origin when none are configured; otherwise exactly the listed ones.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    use crate::adapters::leads::{InMemoryLeadRepository, MockLeadRelay};

    fn test_state() -> FormsAppState {
        FormsAppState {
            lead_repository: Arc::new(InMemoryLeadRepository::new()),
            lead_relay: Arc::new(MockLeadRelay::responding(json!({"success": true}))),
        }
    }

    #[tokio::test]
    async fn app_router_allows_configured_origin() {
        let server = ServerConfig {
            cors_origins: Some("https://theolingua.in".to_string()),
            ..Default::default()
        };
        let app = app_router(test_state(), &server);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("origin", "https://theolingua.in")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "https://theolingua.in"
        );
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let app = app_router(test_state(), &ServerConfig::default());

        let response = app
            .oneshot(Request::builder().uri("/api/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
