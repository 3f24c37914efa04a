//! Integration tests for the forms relay server.
//!
//! These tests verify:
//! 1. The full router (with its layers) relays leads and keeps local copies
//! 2. Upstream failures and unreadable payloads map to the right statuses
//! 3. The demo-booking form works end to end over real sockets

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::ServiceExt;

use theolingua::adapters::http::{app_router, FormsAppState};
use theolingua::adapters::{HttpLeadRelay, InMemoryLeadRepository, MockLeadRelay};
use theolingua::application::BookDemoHandler;
use theolingua::config::ServerConfig;
use theolingua::domain::leads::{DemoBooking, LeadError};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn booking() -> DemoBooking {
    DemoBooking {
        name: "Lydia".into(),
        email: "lydia@thyatira.org".into(),
        phone: "+91 90000 11111".into(),
        organization: "Thyatira Bible College".into(),
        role: "Dean".into(),
        program: "koine-greek".into(),
        message: "Looking for a spring cohort".into(),
    }
}

fn app(repository: InMemoryLeadRepository, relay: MockLeadRelay) -> Router {
    let state = FormsAppState {
        lead_repository: Arc::new(repository),
        lead_relay: Arc::new(relay),
    };
    app_router(state, &ServerConfig::default())
}

fn post_forms(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/forms")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Serves `router` on an ephemeral local port and returns its base URL.
async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A stand-in for the external CRM endpoint.
async fn crm(status: StatusCode, body: Value) -> String {
    let router = Router::new().route(
        "/api/forms",
        post(move |Json(_): Json<Value>| {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    );
    format!("{}/api/forms", serve(router).await)
}

// =============================================================================
// Router
// =============================================================================

#[tokio::test]
async fn demo_booking_is_stored_and_relayed() {
    let repository = InMemoryLeadRepository::new();
    let relay = MockLeadRelay::responding(json!({"success": true, "leadId": "L-9"}));
    let app = app(repository.clone(), relay.clone());

    let payload = serde_json::to_string(booking().to_submission().as_value()).unwrap();
    let response = app.oneshot(post_forms(payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"success": true, "leadId": "L-9"})
    );

    let records = repository.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Lydia");
    assert_eq!(records[0].email, "lydia@thyatira.org");
    assert_eq!(records[0].subject, "Demo Booking");
    assert_eq!(records[0].message, "Looking for a spring cohort");
    assert_eq!(relay.forwarded()[0].as_value()["source"], "TheoLingua Website");
}

#[tokio::test]
async fn storage_failure_does_not_block_relay() {
    let relay = MockLeadRelay::responding(json!({"success": true}));
    let app = app(InMemoryLeadRepository::failing("disk full"), relay.clone());

    let response = app
        .oneshot(post_forms(r#"{"formName":"Contact","data":{"name":"Tabitha"}}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(relay.forwarded().len(), 1);
}

#[tokio::test]
async fn upstream_status_is_passed_through() {
    let relay = MockLeadRelay::failing(LeadError::Upstream {
        status: 503,
        body: "maintenance".into(),
    });
    let app = app(InMemoryLeadRepository::new(), relay);

    let response = app.oneshot(post_forms(r#"{"formName":"Contact"}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body_json(response).await,
        json!({"success": false, "error": "External API error: 503"})
    );
}

#[tokio::test]
async fn unreadable_payload_is_bad_request() {
    let relay = MockLeadRelay::responding(json!({"success": true}));
    let app = app(InMemoryLeadRepository::new(), relay.clone());

    let response = app.oneshot(post_forms("{not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["success"], false);
    assert!(relay.forwarded().is_empty());
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app(
        InMemoryLeadRepository::new(),
        MockLeadRelay::responding(json!({})),
    );

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "ok"}));
}

// =============================================================================
// Over The Wire
// =============================================================================

async fn relay_server(crm_url: String, repository: InMemoryLeadRepository) -> String {
    let state = FormsAppState {
        lead_repository: Arc::new(repository),
        lead_relay: Arc::new(HttpLeadRelay::new(crm_url, Duration::from_secs(5)).unwrap()),
    };
    let base = serve(app_router(state, &ServerConfig::default())).await;
    format!("{}/api/forms", base)
}

#[tokio::test]
async fn book_demo_reaches_the_crm() {
    let crm_url = crm(StatusCode::OK, json!({"success": true})).await;
    let repository = InMemoryLeadRepository::new();
    let forms_url = relay_server(crm_url, repository.clone()).await;

    let handler = BookDemoHandler::new(Arc::new(
        HttpLeadRelay::new(forms_url, Duration::from_secs(5)).unwrap(),
    ));
    handler.submit(&booking()).await.unwrap();

    assert_eq!(repository.records()[0].name, "Lydia");
}

#[tokio::test]
async fn book_demo_reports_crm_failure() {
    let crm_url = crm(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"message": "boom"}),
    )
    .await;
    let forms_url = relay_server(crm_url, InMemoryLeadRepository::new()).await;

    let handler = BookDemoHandler::new(Arc::new(
        HttpLeadRelay::new(forms_url, Duration::from_secs(5)).unwrap(),
    ));
    let err = handler.submit(&booking()).await.unwrap_err();

    assert_eq!(
        err,
        LeadError::Rejected(
            r#"Server error: 500 - {"success":false,"error":"External API error: 500"}"#.into()
        )
    );
}

#[tokio::test]
async fn book_demo_requires_contact_details() {
    let relay = MockLeadRelay::responding(json!({"success": true}));
    let handler = BookDemoHandler::new(Arc::new(relay.clone()));

    let err = handler
        .submit(&DemoBooking {
            name: "Lydia".into(),
            email: "not-an-address".into(),
            ..DemoBooking::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, LeadError::Rejected(_)));
    assert!(relay.forwarded().is_empty());
}
