//! ComboCheckoutDialog - Controller for the two-program combo checkout.
//!
//! Drives create-order, payment widget, verify-payment strictly in sequence.
//! The dialog state lives behind a mutex that is only held between awaits;
//! after each await the controller checks that the dialog is still mounted
//! and still showing the session that started the flow.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{error, info, warn};

use crate::application::MountGuard;
use crate::domain::checkout::{
    CheckoutError, CheckoutState, CheckoutStatus, ComboOrder, ComboOrderRequest,
    VerifyPaymentRequest, WidgetOptions, WidgetOutcome, INITIATION_FALLBACK,
    ORDER_CREATION_FALLBACK, PAYMENT_SUCCEEDED, VERIFICATION_FAILED, WIDGET_UNAVAILABLE,
};
use crate::domain::pricing::{ComboOffer, PriceBreakdown};
use crate::ports::{ComboOrderGateway, Notification, Notifier, PaymentWidget};

/// Invoked once a payment is verified, so the host can refresh subscriptions.
pub type SuccessCallback = Arc<dyn Fn() + Send + Sync>;

/// Static checkout settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSettings {
    pub gateway: String,
    pub merchant_name: String,
    pub theme_color: String,
    pub default_duration: u32,
    /// How long the success state is shown before the dialog closes itself.
    pub confirmation_delay: Duration,
}

impl Default for CheckoutSettings {
    fn default() -> Self {
        Self {
            gateway: "RAZORPAY".to_string(),
            merchant_name: "TheoLingua".to_string(),
            theme_color: "#f97316".to_string(),
            default_duration: 3,
            confirmation_delay: Duration::from_millis(1500),
        }
    }
}

/// How a submit ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Payment verified.
    Succeeded,
    /// The user closed the payment widget; the dialog is editable again.
    Dismissed,
    /// The dialog was closed or unmounted mid-flow; nothing was applied.
    Abandoned,
}

/// Clears the in-flight lock when a submit finishes or is dropped.
struct FlightGuard<'a>(&'a Mutex<CheckoutState>);

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .end_flight();
    }
}

pub struct ComboCheckoutDialog {
    offer: ComboOffer,
    gateway: Arc<dyn ComboOrderGateway>,
    widget: Arc<dyn PaymentWidget>,
    notifier: Arc<dyn Notifier>,
    settings: CheckoutSettings,
    on_success: Option<SuccessCallback>,
    state: Mutex<CheckoutState>,
    mount: MountGuard,
}

impl ComboCheckoutDialog {
    pub fn new(
        offer: ComboOffer,
        gateway: Arc<dyn ComboOrderGateway>,
        widget: Arc<dyn PaymentWidget>,
        notifier: Arc<dyn Notifier>,
        settings: CheckoutSettings,
    ) -> Self {
        let state = CheckoutState::new(settings.default_duration);
        Self {
            offer,
            gateway,
            widget,
            notifier,
            settings,
            on_success: None,
            state: Mutex::new(state),
            mount: MountGuard::new(),
        }
    }

    pub fn with_success_callback(mut self, callback: SuccessCallback) -> Self {
        self.on_success = Some(callback);
        self
    }

    fn state(&self) -> MutexGuard<'_, CheckoutState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Selection
    // ════════════════════════════════════════════════════════════════════════════

    pub fn open(&self, selected_duration: u32) {
        self.state().open(selected_duration);
    }

    pub fn close(&self) {
        self.state().close();
    }

    /// Detaches the dialog from its host; pending results are dropped.
    pub fn unmount(&self) {
        self.mount.unmount();
    }

    pub fn select_duration(&self, months: u32) -> bool {
        self.state().select_duration(months)
    }

    pub fn toggle_workbooks(&self) -> bool {
        self.state().toggle_workbooks()
    }

    pub fn durations(&self) -> Vec<u32> {
        self.offer.durations()
    }

    /// Breakdown for the current selection; an error means nothing to show.
    pub fn breakdown(&self) -> Result<PriceBreakdown, CheckoutError> {
        self.state().breakdown(&self.offer)
    }

    pub fn can_submit(&self) -> bool {
        self.state().can_submit(&self.offer)
    }

    pub fn status(&self) -> CheckoutStatus {
        self.state().status
    }

    pub fn snapshot(&self) -> CheckoutState {
        self.state().clone()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Checkout flow
    // ════════════════════════════════════════════════════════════════════════════

    /// Runs the checkout for the current selection.
    ///
    /// Calling this while a checkout is already running returns
    /// `CheckoutError::Busy` without any side effect. That includes a flow
    /// started before the dialog was closed and reopened.
    pub async fn submit(&self) -> Result<CheckoutOutcome, CheckoutError> {
        let (breakdown, session) = {
            let mut state = self.state();
            let breakdown = state.begin_submit(&self.offer)?;
            (breakdown, state.session)
        };
        let _flight = FlightGuard(&self.state);

        let request = ComboOrderRequest {
            basics_class_id: self.offer.basics.class_id,
            advanced_class_id: self.offer.advanced.class_id,
            duration_months: breakdown.duration_months,
            gateway: self.settings.gateway.clone(),
            include_workbooks: breakdown.include_workbooks,
        };
        info!(
            basics = %request.basics_class_id,
            advanced = %request.advanced_class_id,
            duration_months = request.duration_months,
            include_workbooks = request.include_workbooks,
            quoted_total = breakdown.final_total.value(),
            "Creating combo order"
        );

        let order = match self.gateway.create_combo_order(request).await {
            Ok(order) => order,
            Err(e) => {
                warn!(error = %e, "Combo order creation failed");
                let message = if e.is_transport() {
                    INITIATION_FALLBACK.to_string()
                } else {
                    e.message_or(ORDER_CREATION_FALLBACK)
                };
                let err = CheckoutError::order_creation(message);
                if self.settle(session, CheckoutStatus::Idle) {
                    self.notifier.notify(Notification::error(err.to_string()));
                }
                return Err(err);
            }
        };

        if !self.settle(session, CheckoutStatus::AwaitingPayment) {
            info!(order_id = %order.id, "Checkout abandoned before payment");
            return Ok(CheckoutOutcome::Abandoned);
        }

        let options = WidgetOptions::for_order(
            &order,
            self.settings.merchant_name.clone(),
            self.offer.description(breakdown.duration_months),
            self.settings.theme_color.clone(),
        );

        match self.widget.open(options).await {
            Err(e) => {
                warn!(error = %e, order_id = %order.id, "Payment widget unavailable");
                if self.settle(session, CheckoutStatus::Idle) {
                    self.notifier.notify(Notification::error(WIDGET_UNAVAILABLE));
                }
                Err(CheckoutError::WidgetUnavailable)
            }
            Ok(WidgetOutcome::Dismissed) => {
                info!(order_id = %order.id, "Payment widget dismissed");
                self.settle(session, CheckoutStatus::Idle);
                Ok(CheckoutOutcome::Dismissed)
            }
            Ok(WidgetOutcome::Completed(receipt)) => {
                self.settle(session, CheckoutStatus::Verifying);
                self.verify(session, &order, VerifyPaymentRequest::new(receipt, &order))
                    .await
            }
        }
    }

    /// Verifies a receipt. Runs even if the dialog went away meanwhile,
    /// since the user has already paid.
    async fn verify(
        &self,
        session: u64,
        order: &ComboOrder,
        request: VerifyPaymentRequest,
    ) -> Result<CheckoutOutcome, CheckoutError> {
        info!(
            order_id = %order.id,
            payment_id = %request.receipt.razorpay_payment_id,
            "Verifying payment"
        );

        if let Err(e) = self.gateway.verify_payment(request).await {
            error!(error = %e, order_id = %order.id, "Payment verification failed");
            if self.settle(session, CheckoutStatus::Failed) {
                self.notifier.notify(Notification::error(VERIFICATION_FAILED));
            }
            return Err(CheckoutError::verification(e.to_string()));
        }

        info!(order_id = %order.id, "Payment verified");
        if !self.settle(session, CheckoutStatus::Succeeded) {
            return Ok(CheckoutOutcome::Succeeded);
        }

        self.notifier.notify(Notification::success(PAYMENT_SUCCEEDED));
        if let Some(callback) = &self.on_success {
            callback();
        }

        tokio::time::sleep(self.settings.confirmation_delay).await;
        let mut state = self.state();
        if self.mount.is_mounted() && state.is_current(session) {
            state.close();
        }
        Ok(CheckoutOutcome::Succeeded)
    }

    /// Moves to `next` if the flow is still relevant. Returns whether it was.
    fn settle(&self, session: u64, next: CheckoutStatus) -> bool {
        if !self.mount.is_mounted() {
            return false;
        }
        let mut state = self.state();
        if !state.is_current(session) {
            return false;
        }
        if let Err(e) = state.advance(next) {
            warn!(error = %e, "Unexpected checkout transition");
            return false;
        }
        true
    }
}
