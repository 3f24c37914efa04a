//! Payment configuration (combo checkout)

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::application::CheckoutSettings;

/// Payment configuration (Razorpay via the backend)
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Gateway tag sent with every combo order
    #[serde(default = "default_gateway")]
    pub gateway: String,

    /// Merchant name shown in the payment widget
    #[serde(default = "default_merchant_name")]
    pub merchant_name: String,

    /// Widget accent colour
    #[serde(default = "default_theme_color")]
    pub theme_color: String,

    /// Duration preselected when the dialog opens
    #[serde(default = "default_duration")]
    pub default_duration_months: u32,

    /// How long the success state is shown, in milliseconds
    #[serde(default = "default_confirmation_delay")]
    pub confirmation_delay_ms: u64,
}

impl PaymentConfig {
    pub fn checkout_settings(&self) -> CheckoutSettings {
        CheckoutSettings {
            gateway: self.gateway.clone(),
            merchant_name: self.merchant_name.clone(),
            theme_color: self.theme_color.clone(),
            default_duration: self.default_duration_months,
            confirmation_delay: Duration::from_millis(self.confirmation_delay_ms),
        }
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.gateway.trim().is_empty() {
            return Err(ValidationError::EmptyGateway);
        }
        let hex = self.theme_color.strip_prefix('#').unwrap_or("");
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValidationError::InvalidThemeColor);
        }
        if self.default_duration_months == 0 {
            return Err(ValidationError::InvalidDefaultDuration);
        }
        Ok(())
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            gateway: default_gateway(),
            merchant_name: default_merchant_name(),
            theme_color: default_theme_color(),
            default_duration_months: default_duration(),
            confirmation_delay_ms: default_confirmation_delay(),
        }
    }
}

fn default_gateway() -> String {
    "RAZORPAY".to_string()
}

fn default_merchant_name() -> String {
    "TheoLingua".to_string()
}

fn default_theme_color() -> String {
    "#f97316".to_string()
}

fn default_duration() -> u32 {
    3
}

fn default_confirmation_delay() -> u64 {
    1500
}
