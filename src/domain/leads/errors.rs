//! Lead capture errors.

use thiserror::Error;

pub const SUBMIT_FALLBACK: &str = "Failed to submit form";
pub const NETWORK_ERROR: &str = "Network error: Unable to connect to the server.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeadError {
    /// The relay answered with a non-2xx status.
    #[error("External API error: {status}")]
    Upstream { status: u16, body: String },

    /// The relay answered 2xx but reported failure.
    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    Transport(String),

    #[error("Lead storage failed: {0}")]
    Storage(String),
}

impl LeadError {
    pub fn rejected(message: Option<&str>) -> Self {
        LeadError::Rejected(
            message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(SUBMIT_FALLBACK)
                .to_string(),
        )
    }

    pub fn storage(message: impl Into<String>) -> Self {
        LeadError::Storage(message.into())
    }
}
