//! Axum router configuration for the forms relay.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{health, submit_form, FormsAppState};

/// Create the forms relay router.
///
/// # Routes
/// - `POST /api/forms` - Relay a lead (local copy saved best-effort)
/// - `GET /health` - Liveness probe
pub fn forms_router() -> Router<FormsAppState> {
    Router::new()
        .route("/api/forms", post(submit_form))
        .route("/health", get(health))
}
