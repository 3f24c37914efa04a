//! Checkout errors.

use thiserror::Error;

use crate::domain::pricing::PricingError;

pub const ORDER_CREATION_FALLBACK: &str = "Failed to create payment order";
pub const INITIATION_FALLBACK: &str = "Failed to initiate payment. Please try again.";
pub const WIDGET_UNAVAILABLE: &str =
    "Payment system not available. Please refresh the page and try again.";
pub const VERIFICATION_FAILED: &str = "Payment verification failed. Please contact support.";
pub const PAYMENT_SUCCEEDED: &str = "Payment successful! Your subscriptions are now active.";

/// Errors raised while driving a combo checkout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Checkout is unavailable: {0}")]
    Unavailable(#[from] PricingError),

    #[error("The checkout dialog is closed")]
    Closed,

    #[error("A checkout is already in progress")]
    Busy,

    /// Backend refused to create the order; the message is shown verbatim.
    #[error("{0}")]
    OrderCreation(String),

    #[error("{}", WIDGET_UNAVAILABLE)]
    WidgetUnavailable,

    /// The detail is logged; the user only sees the support message.
    #[error("{}", VERIFICATION_FAILED)]
    Verification(String),
}

impl CheckoutError {
    pub fn order_creation(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            CheckoutError::OrderCreation(ORDER_CREATION_FALLBACK.to_string())
        } else {
            CheckoutError::OrderCreation(message)
        }
    }

    pub fn verification(detail: impl Into<String>) -> Self {
        CheckoutError::Verification(detail.into())
    }
}
