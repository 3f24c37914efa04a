//! Lead capture ports.
//!
//! Leads are relayed to an external CRM-like endpoint, which is the system of
//! record. A local copy is kept best-effort through `LeadRepository`.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::leads::{FormResponseRecord, LeadError, LeadSubmission};

#[async_trait]
pub trait LeadRelay: Send + Sync {
    /// Posts the payload verbatim and returns the relay's JSON answer.
    ///
    /// A non-2xx answer is `LeadError::Upstream`; no answer at all is
    /// `LeadError::Transport`.
    async fn forward(&self, submission: &LeadSubmission) -> Result<Value, LeadError>;
}

#[async_trait]
pub trait LeadRepository: Send + Sync {
    async fn save(&self, record: &FormResponseRecord) -> Result<(), LeadError>;
}
