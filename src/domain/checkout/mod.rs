//! Checkout domain module.
//!
//! Combo order wire types, the checkout status machine and the dialog state
//! the checkout controller drives.

mod errors;
mod order;
mod state;
mod status;

pub use errors::{
    CheckoutError, INITIATION_FALLBACK, ORDER_CREATION_FALLBACK, PAYMENT_SUCCEEDED,
    VERIFICATION_FAILED, WIDGET_UNAVAILABLE,
};
pub use order::{
    ComboOrder, ComboOrderRequest, PaymentReceipt, Prefill, Theme, VerifyPaymentRequest,
    WidgetOptions, WidgetOutcome,
};
pub use state::CheckoutState;
pub use status::CheckoutStatus;
