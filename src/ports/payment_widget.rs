//! Payment widget port.
//!
//! The hosted checkout widget reports back through two callbacks: a
//! completion handler with a receipt, and a dismissal handler. This port folds
//! both into a single awaited outcome so the checkout flow never depends on
//! the widget's callback wiring.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::checkout::{WidgetOptions, WidgetOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// The widget script could not be loaded.
    #[error("Payment widget unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait PaymentWidget: Send + Sync {
    /// Opens the widget and waits until the user pays or dismisses it.
    async fn open(&self, options: WidgetOptions) -> Result<WidgetOutcome, WidgetError>;
}
