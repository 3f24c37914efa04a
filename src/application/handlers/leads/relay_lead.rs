//! RelayLeadHandler - Command handler behind `POST /api/forms`.
//!
//! Keeps a local copy of the lead (best-effort), then forwards the payload to
//! the external forms endpoint, which is the system of record.

use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info};

use crate::domain::leads::{FormResponseRecord, LeadError, LeadSubmission};
use crate::ports::{LeadRelay, LeadRepository};

#[derive(Debug, Clone)]
pub struct RelayLeadCommand {
    pub submission: LeadSubmission,
}

#[derive(Debug, Clone)]
pub struct RelayLeadResult {
    /// The relay's answer, echoed to the caller.
    pub response: Value,
    /// Id of the local copy, if saving it worked.
    pub record_id: Option<uuid::Uuid>,
}

pub struct RelayLeadHandler {
    repository: Arc<dyn LeadRepository>,
    relay: Arc<dyn LeadRelay>,
}

impl RelayLeadHandler {
    pub fn new(repository: Arc<dyn LeadRepository>, relay: Arc<dyn LeadRelay>) -> Self {
        Self { repository, relay }
    }

    pub async fn handle(&self, cmd: RelayLeadCommand) -> Result<RelayLeadResult, LeadError> {
        // 1. Local copy; never fails the request
        let record = FormResponseRecord::from_submission(&cmd.submission);
        let record_id = match self.repository.save(&record).await {
            Ok(()) => {
                info!(record_id = %record.id, subject = %record.subject, "Lead saved locally");
                Some(record.id)
            }
            Err(e) => {
                error!(error = %e, "Failed to save lead locally");
                None
            }
        };

        // 2. Forward to the relay
        let response = self.relay.forward(&cmd.submission).await.map_err(|e| {
            error!(error = %e, "Lead relay failed");
            e
        })?;

        Ok(RelayLeadResult {
            response,
            record_id,
        })
    }
}
