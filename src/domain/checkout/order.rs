//! Orders, receipts and payment widget configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::{Paise, ProgramId};

/// Body of the "create combo order" call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboOrderRequest {
    pub basics_class_id: ProgramId,
    pub advanced_class_id: ProgramId,
    pub duration_months: u32,
    pub gateway: String,
    pub include_workbooks: bool,
}

/// Server-issued payment intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboOrder {
    pub id: String,
    pub amount: Paise,
    pub currency: String,
    pub key_id: String,
    /// Opaque to this side; echoed back on verification.
    #[serde(default)]
    pub metadata: Value,
}

impl ComboOrder {
    fn metadata_str(&self, key: &str) -> String {
        self.metadata
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }

    /// Customer name to prefill in the widget.
    pub fn user_name(&self) -> String {
        self.metadata_str("userName")
    }

    /// Customer email to prefill in the widget.
    pub fn user_email(&self) -> String {
        self.metadata_str("userEmail")
    }
}

/// Proof of payment reported by the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub razorpay_payment_id: String,
    pub razorpay_order_id: String,
    pub razorpay_signature: String,
}

/// Body of the "verify payment" call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyPaymentRequest {
    #[serde(flatten)]
    pub receipt: PaymentReceipt,
    pub metadata: Value,
}

impl VerifyPaymentRequest {
    pub fn new(receipt: PaymentReceipt, order: &ComboOrder) -> Self {
        Self {
            receipt,
            metadata: order.metadata.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefill {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub color: String,
}

/// Configuration handed to the payment widget.
///
/// The completion and dismissal callbacks are not part of the options; they
/// are the two outcomes of `PaymentWidget::open`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetOptions {
    pub key: String,
    pub amount: Paise,
    pub currency: String,
    pub name: String,
    pub description: String,
    pub order_id: String,
    pub prefill: Prefill,
    pub theme: Theme,
}

impl WidgetOptions {
    pub fn for_order(
        order: &ComboOrder,
        merchant_name: impl Into<String>,
        description: impl Into<String>,
        theme_color: impl Into<String>,
    ) -> Self {
        Self {
            key: order.key_id.clone(),
            amount: order.amount,
            currency: order.currency.clone(),
            name: merchant_name.into(),
            description: description.into(),
            order_id: order.id.clone(),
            prefill: Prefill {
                name: order.user_name(),
                email: order.user_email(),
            },
            theme: Theme {
                color: theme_color.into(),
            },
        }
    }
}

/// How the payment widget session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetOutcome {
    Completed(PaymentReceipt),
    Dismissed,
}
