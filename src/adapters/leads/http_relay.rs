//! HttpLeadRelay - Forwards lead payloads to the external forms endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::leads::{LeadError, LeadSubmission};
use crate::ports::LeadRelay;

pub struct HttpLeadRelay {
    url: String,
    client: Client,
}

impl HttpLeadRelay {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, LeadError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LeadError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

#[async_trait]
impl LeadRelay for HttpLeadRelay {
    async fn forward(&self, submission: &LeadSubmission) -> Result<Value, LeadError> {
        debug!(url = %self.url, "Forwarding lead");

        let response = self
            .client
            .post(&self.url)
            .json(submission.as_value())
            .send()
            .await
            .map_err(|e| LeadError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), body = %body, "Lead relay rejected payload");
            return Err(LeadError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| LeadError::Transport(format!("Invalid relay response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn unreachable_relay_is_transport_error() {
        let relay = HttpLeadRelay::new("http://127.0.0.1:9/api/forms", Duration::from_secs(2))
            .unwrap();
        let err = relay
            .forward(&LeadSubmission(json!({"formName": "Demo Booking"})))
            .await
            .unwrap_err();
        assert!(matches!(err, LeadError::Transport(_)));
    }
}
