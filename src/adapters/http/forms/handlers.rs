//! HTTP handlers for the forms relay.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;
use tracing::warn;

use crate::application::handlers::leads::{RelayLeadCommand, RelayLeadHandler};
use crate::domain::leads::{LeadError, LeadSubmission};
use crate::ports::{LeadRelay, LeadRepository};

use super::dto::{FormsErrorResponse, HealthResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct FormsAppState {
    pub lead_repository: Arc<dyn LeadRepository>,
    pub lead_relay: Arc<dyn LeadRelay>,
}

impl FormsAppState {
    pub fn relay_lead_handler(&self) -> RelayLeadHandler {
        RelayLeadHandler::new(self.lead_repository.clone(), self.lead_relay.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/forms - Save a local copy, then relay the lead
pub async fn submit_form(
    State(state): State<FormsAppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, FormsApiError> {
    let Json(body) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Unreadable form payload");
        FormsApiError::BadRequest(rejection.body_text())
    })?;

    let result = state
        .relay_lead_handler()
        .handle(RelayLeadCommand {
            submission: LeadSubmission(body),
        })
        .await?;

    Ok(Json(result.response))
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse::ok())
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts lead errors to HTTP responses.
#[derive(Debug)]
pub enum FormsApiError {
    BadRequest(String),
    Lead(LeadError),
}

impl From<LeadError> for FormsApiError {
    fn from(err: LeadError) -> Self {
        Self::Lead(err)
    }
}

impl IntoResponse for FormsApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            FormsApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            FormsApiError::Lead(err @ LeadError::Upstream { status, .. }) => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                err.to_string(),
            ),
            FormsApiError::Lead(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };

        (status, Json(FormsErrorResponse::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_status_is_passed_through() {
        let response = FormsApiError::from(LeadError::Upstream {
            status: 429,
            body: "slow down".into(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn transport_failure_is_internal_error() {
        let response =
            FormsApiError::from(LeadError::Transport("connection reset".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
