//! Upload and file-manager errors.

use thiserror::Error;

pub const UPLOAD_FALLBACK: &str = "Failed to upload file";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("File too large. Maximum size: {max_mb}MB")]
    TooLarge { max_mb: u64, actual_bytes: u64 },

    #[error("An upload is already in progress")]
    Busy,

    /// Storage service refused the file; message from its response.
    #[error("{0}")]
    Rejected(String),

    #[error("{}", UPLOAD_FALLBACK)]
    Transport,
}

impl UploadError {
    pub fn rejected(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            UploadError::Transport
        } else {
            UploadError::Rejected(message)
        }
    }
}
