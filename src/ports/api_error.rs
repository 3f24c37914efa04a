//! Error type shared by every port that talks to a remote REST endpoint.

use thiserror::Error;

/// How a remote call failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response arrived (connection refused, DNS, timeout).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("Request rejected with status {status}")]
    Rejected {
        status: u16,
        /// The `error` field of the response body, when present.
        message: Option<String>,
    },

    /// The response body did not have the expected shape.
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        ApiError::Transport(message.into())
    }

    pub fn rejected(status: u16, message: Option<String>) -> Self {
        ApiError::Rejected {
            status,
            message: message.filter(|m| !m.trim().is_empty()),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        ApiError::Decode(message.into())
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    /// The server's own message when it sent one, otherwise `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}
