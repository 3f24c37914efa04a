//! BookDemoHandler - Submits the public "book a demo" form.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::foundation::ValidationError;
use crate::domain::leads::{DemoBooking, LeadError, NETWORK_ERROR};
use crate::ports::LeadRelay;

pub struct BookDemoHandler {
    relay: Arc<dyn LeadRelay>,
}

impl BookDemoHandler {
    pub fn new(relay: Arc<dyn LeadRelay>) -> Self {
        Self { relay }
    }

    /// Checks the fields the form marks as required.
    pub fn validate(booking: &DemoBooking) -> Result<(), ValidationError> {
        if booking.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if booking.email.trim().is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if !booking.email.contains('@') {
            return Err(ValidationError::invalid_format("email", "missing @"));
        }
        Ok(())
    }

    /// Posts the booking. Any error carries the message to show the user.
    pub async fn submit(&self, booking: &DemoBooking) -> Result<(), LeadError> {
        Self::validate(booking).map_err(|e| LeadError::Rejected(e.to_string()))?;

        let submission = booking.to_submission();
        let response = match self.relay.forward(&submission).await {
            Ok(response) => response,
            Err(LeadError::Upstream { status, body }) => {
                warn!(status, body = %body, "Demo booking rejected by server");
                return Err(LeadError::Rejected(format!(
                    "Server error: {} - {}",
                    status, body
                )));
            }
            Err(LeadError::Transport(detail)) => {
                warn!(error = %detail, "Demo booking could not reach the server");
                return Err(LeadError::Transport(NETWORK_ERROR.to_string()));
            }
            Err(other) => return Err(other),
        };

        if response.get("success").and_then(|v| v.as_bool()) == Some(true) {
            info!(email = %booking.email, "Demo booking submitted");
            Ok(())
        } else {
            let message = response.get("error").and_then(|v| v.as_str());
            Err(LeadError::rejected(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::adapters::leads::MockLeadRelay;
    use crate::domain::leads::SUBMIT_FALLBACK;

    fn booking() -> DemoBooking {
        DemoBooking {
            name: "Ruth".into(),
            email: "ruth@example.org".into(),
            ..DemoBooking::default()
        }
    }

    #[tokio::test]
    async fn successful_booking() {
        let relay = Arc::new(MockLeadRelay::responding(json!({"success": true})));
        let handler = BookDemoHandler::new(relay.clone());

        handler.submit(&booking()).await.unwrap();

        let sent = relay.forwarded();
        assert_eq!(sent[0].as_value()["formName"], "Demo Booking");
        assert_eq!(sent[0].as_value()["tags"], "demo-request");
    }

    #[tokio::test]
    async fn unsuccessful_response_uses_error_field() {
        let relay = Arc::new(MockLeadRelay::responding(
            json!({"success": false, "error": "Duplicate lead"}),
        ));
        let err = BookDemoHandler::new(relay)
            .submit(&booking())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Duplicate lead");
    }

    #[tokio::test]
    async fn unsuccessful_response_without_error_uses_fallback() {
        let relay = Arc::new(MockLeadRelay::responding(json!({"success": false})));
        let err = BookDemoHandler::new(relay)
            .submit(&booking())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), SUBMIT_FALLBACK);
    }

    #[tokio::test]
    async fn server_error_includes_status_and_body() {
        let relay = Arc::new(MockLeadRelay::failing(LeadError::Upstream {
            status: 500,
            body: "boom".into(),
        }));
        let err = BookDemoHandler::new(relay)
            .submit(&booking())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Server error: 500 - boom");
    }

    #[tokio::test]
    async fn transport_failure_is_network_error() {
        let relay = Arc::new(MockLeadRelay::failing(LeadError::Transport(
            "dns".into(),
        )));
        let err = BookDemoHandler::new(relay)
            .submit(&booking())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), NETWORK_ERROR);
    }

    #[tokio::test]
    async fn missing_email_is_rejected_locally() {
        let relay = Arc::new(MockLeadRelay::responding(json!({"success": true})));
        let mut incomplete = booking();
        incomplete.email.clear();

        assert!(BookDemoHandler::new(relay.clone())
            .submit(&incomplete)
            .await
            .is_err());
        assert!(relay.forwarded().is_empty());
    }
}
