//! ChannelPaymentWidget - Bridges `PaymentWidget::open` to the host UI.
//!
//! The host owns the actual Razorpay checkout. Each `open` sends a
//! `WidgetRequest` over a channel; the host answers exactly once through
//! `complete` (the widget's `handler`) or `dismiss` (`modal.ondismiss`).
//!
//! A request dropped without an answer resolves as a dismissal, so a host
//! that goes away never leaves the dialog stuck in Submitting.

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use crate::domain::checkout::{PaymentReceipt, WidgetOptions, WidgetOutcome};
use crate::ports::{PaymentWidget, WidgetError};

/// A pending widget session, handed to the host.
#[derive(Debug)]
pub struct WidgetRequest {
    options: WidgetOptions,
    reply: oneshot::Sender<WidgetOutcome>,
}

impl WidgetRequest {
    pub fn options(&self) -> &WidgetOptions {
        &self.options
    }

    /// The user paid.
    pub fn complete(self, receipt: PaymentReceipt) {
        // The dialog may have stopped listening; nothing to do then
        let _ = self.reply.send(WidgetOutcome::Completed(receipt));
    }

    /// The user closed the widget.
    pub fn dismiss(self) {
        let _ = self.reply.send(WidgetOutcome::Dismissed);
    }
}

#[derive(Debug, Clone)]
pub struct ChannelPaymentWidget {
    requests: mpsc::Sender<WidgetRequest>,
}

impl ChannelPaymentWidget {
    /// Returns the widget and the receiving end the host must drain.
    pub fn new(buffer: usize) -> (Self, mpsc::Receiver<WidgetRequest>) {
        let (requests, rx) = mpsc::channel(buffer.max(1));
        (Self { requests }, rx)
    }
}

#[async_trait]
impl PaymentWidget for ChannelPaymentWidget {
    async fn open(&self, options: WidgetOptions) -> Result<WidgetOutcome, WidgetError> {
        let order_id = options.order_id.clone();
        let (reply, outcome) = oneshot::channel();

        self.requests
            .send(WidgetRequest { options, reply })
            .await
            .map_err(|_| {
                warn!(order_id = %order_id, "Payment widget host is gone");
                WidgetError::Unavailable("widget host not running".to_string())
            })?;
        debug!(order_id = %order_id, "Payment widget opened");

        match outcome.await {
            Ok(outcome) => Ok(outcome),
            Err(_) => {
                warn!(order_id = %order_id, "Payment widget dropped without an answer");
                Ok(WidgetOutcome::Dismissed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checkout::{Prefill, Theme};
    use crate::domain::foundation::Paise;

    fn test_options() -> WidgetOptions {
        WidgetOptions {
            key: "rzp_test".into(),
            amount: Paise::new(80820),
            currency: "INR".into(),
            name: "TheoLingua".into(),
            description: "Basics + Advanced - 3 Months".into(),
            order_id: "order_1".into(),
            prefill: Prefill {
                name: "Asha".into(),
                email: "asha@example.com".into(),
            },
            theme: Theme {
                color: "#f97316".into(),
            },
        }
    }

    fn test_receipt() -> PaymentReceipt {
        PaymentReceipt {
            razorpay_payment_id: "pay_1".into(),
            razorpay_order_id: "order_1".into(),
            razorpay_signature: "sig_1".into(),
        }
    }

    #[tokio::test]
    async fn host_completion_is_delivered() {
        let (widget, mut host) = ChannelPaymentWidget::new(1);
        tokio::spawn(async move {
            let request = host.recv().await.unwrap();
            assert_eq!(request.options().order_id, "order_1");
            request.complete(test_receipt());
        });

        let outcome = widget.open(test_options()).await.unwrap();
        assert_eq!(outcome, WidgetOutcome::Completed(test_receipt()));
    }

    #[tokio::test]
    async fn host_dismissal_is_delivered() {
        let (widget, mut host) = ChannelPaymentWidget::new(1);
        tokio::spawn(async move {
            host.recv().await.unwrap().dismiss();
        });

        assert_eq!(
            widget.open(test_options()).await,
            Ok(WidgetOutcome::Dismissed)
        );
    }

    #[tokio::test]
    async fn dropped_request_counts_as_dismissal() {
        let (widget, mut host) = ChannelPaymentWidget::new(1);
        tokio::spawn(async move {
            drop(host.recv().await);
        });

        assert_eq!(
            widget.open(test_options()).await,
            Ok(WidgetOutcome::Dismissed)
        );
    }

    #[tokio::test]
    async fn missing_host_is_unavailable() {
        let (widget, host) = ChannelPaymentWidget::new(1);
        drop(host);

        assert!(matches!(
            widget.open(test_options()).await,
            Err(WidgetError::Unavailable(_))
        ));
    }
}
