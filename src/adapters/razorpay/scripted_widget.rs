//! Scripted payment widget for testing.
//!
//! Answers each `open` with the next queued outcome and records the options
//! it was opened with. An empty script answers with a dismissal.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::checkout::{PaymentReceipt, WidgetOptions, WidgetOutcome};
use crate::ports::{PaymentWidget, WidgetError};

#[derive(Debug, Clone)]
enum Scripted {
    Outcome(WidgetOutcome),
    Unavailable,
}

#[derive(Default)]
struct ScriptState {
    script: VecDeque<Scripted>,
    opened: Vec<WidgetOptions>,
}

#[derive(Default, Clone)]
pub struct ScriptedPaymentWidget {
    inner: Arc<Mutex<ScriptState>>,
}

impl ScriptedPaymentWidget {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, ScriptState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The next open reports a successful payment.
    pub fn push_completed(&self, receipt: PaymentReceipt) {
        self.state()
            .script
            .push_back(Scripted::Outcome(WidgetOutcome::Completed(receipt)));
    }

    /// The next open is closed by the user.
    pub fn push_dismissed(&self) {
        self.state()
            .script
            .push_back(Scripted::Outcome(WidgetOutcome::Dismissed));
    }

    /// The next open fails to load the widget.
    pub fn push_unavailable(&self) {
        self.state().script.push_back(Scripted::Unavailable);
    }

    /// Options of every successful open, in order.
    pub fn opened(&self) -> Vec<WidgetOptions> {
        self.state().opened.clone()
    }
}

#[async_trait]
impl PaymentWidget for ScriptedPaymentWidget {
    async fn open(&self, options: WidgetOptions) -> Result<WidgetOutcome, WidgetError> {
        tokio::task::yield_now().await;

        let mut state = self.state();
        match state.script.pop_front() {
            Some(Scripted::Unavailable) => {
                Err(WidgetError::Unavailable("script not loaded".to_string()))
            }
            Some(Scripted::Outcome(outcome)) => {
                state.opened.push(options);
                Ok(outcome)
            }
            None => {
                state.opened.push(options);
                Ok(WidgetOutcome::Dismissed)
            }
        }
    }
}
