//! Combo order gateway port.
//!
//! The backend owns orders and payment verification. The checkout dialog
//! creates an order, hands it to the payment widget, and asks the backend to
//! verify whatever receipt the widget returns.

use async_trait::async_trait;

use crate::domain::checkout::{ComboOrder, ComboOrderRequest, VerifyPaymentRequest};

use super::ApiError;

#[async_trait]
pub trait ComboOrderGateway: Send + Sync {
    /// `POST /api/payment/combo`
    async fn create_combo_order(&self, request: ComboOrderRequest) -> Result<ComboOrder, ApiError>;

    /// `POST /api/payment/verify`. Any non-2xx answer is a failed verification.
    async fn verify_payment(&self, request: VerifyPaymentRequest) -> Result<(), ApiError>;
}
