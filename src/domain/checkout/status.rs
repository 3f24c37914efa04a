//! Checkout status state machine.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Where a combo checkout currently stands.
///
/// ```text
/// Idle -> Submitting -> AwaitingPayment -> Verifying -> Succeeded
///           |                 |               |
///           v                 v               v
///          Idle              Idle           Failed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStatus {
    /// Selection is editable and checkout can start.
    #[default]
    Idle,
    /// Order creation is in flight.
    Submitting,
    /// The payment widget is open.
    AwaitingPayment,
    /// The receipt is being verified.
    Verifying,
    /// Payment verified; the dialog is showing its confirmation.
    Succeeded,
    /// Verification failed; the user has been sent to support.
    Failed,
}

impl CheckoutStatus {
    /// True while any remote step of the checkout is outstanding.
    pub fn is_in_progress(&self) -> bool {
        matches!(
            self,
            CheckoutStatus::Submitting | CheckoutStatus::AwaitingPayment | CheckoutStatus::Verifying
        )
    }
}

impl StateMachine for CheckoutStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use CheckoutStatus::*;
        matches!(
            (self, target),
            (Idle, Submitting)
                | (Submitting, Idle)
                | (Submitting, AwaitingPayment)
                | (AwaitingPayment, Idle)
                | (AwaitingPayment, Verifying)
                | (Verifying, Succeeded)
                | (Verifying, Failed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use CheckoutStatus::*;
        match self {
            Idle => vec![Submitting],
            Submitting => vec![Idle, AwaitingPayment],
            AwaitingPayment => vec![Idle, Verifying],
            Verifying => vec![Succeeded, Failed],
            Succeeded | Failed => vec![],
        }
    }
}
