//! Response bodies for the forms relay endpoints.
//!
//! Request bodies are free-form JSON and are forwarded untouched.

use serde::{Deserialize, Serialize};

/// Error body, matching what the forms relay itself answers with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormsErrorResponse {
    pub success: bool,
    pub error: String,
}

impl FormsErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
