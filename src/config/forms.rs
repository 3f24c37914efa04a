//! Lead relay configuration

use serde::Deserialize;
use std::time::Duration;

use super::backend::is_http_url;
use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct FormsConfig {
    /// External forms endpoint leads are forwarded to
    #[serde(default = "default_relay_url")]
    pub relay_url: String,

    /// Relay timeout in seconds
    #[serde(default = "default_timeout")]
    pub relay_timeout_secs: u64,
}

impl FormsConfig {
    pub fn relay_timeout(&self) -> Duration {
        Duration::from_secs(self.relay_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_http_url(&self.relay_url) {
            return Err(ValidationError::InvalidUrl("forms.relay_url"));
        }
        if self.relay_timeout_secs == 0 || self.relay_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            relay_url: default_relay_url(),
            relay_timeout_secs: default_timeout(),
        }
    }
}

fn default_relay_url() -> String {
    "https://www.sciolabs.in/api/forms".to_string()
}

fn default_timeout() -> u64 {
    15
}
