//! Combo checkout dialog state.
//!
//! A plain value updated through reducer-style methods. The async dialog
//! controller owns one of these and never touches its fields directly.

use crate::domain::foundation::{StateMachine, ValidationError};
use crate::domain::pricing::{ComboOffer, PriceBreakdown};

use super::{CheckoutError, CheckoutStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutState {
    pub is_open: bool,
    pub duration_months: u32,
    pub include_workbooks: bool,
    pub status: CheckoutStatus,
    /// Bumped on every open and close; a flow started in an older session
    /// must not touch this one.
    pub session: u64,
    /// An order flow is running for this dialog instance. Survives open and
    /// close; only the flow itself clears it.
    pub in_flight: bool,
}

impl CheckoutState {
    pub fn new(default_duration: u32) -> Self {
        Self {
            is_open: false,
            duration_months: default_duration,
            include_workbooks: false,
            status: CheckoutStatus::Idle,
            session: 0,
            in_flight: false,
        }
    }

    /// Opens the dialog on the caller's currently selected duration.
    ///
    /// Any previous session's outcome is forgotten.
    pub fn open(&mut self, duration_months: u32) {
        self.is_open = true;
        self.duration_months = duration_months;
        self.status = CheckoutStatus::Idle;
        self.session += 1;
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.status = CheckoutStatus::Idle;
        self.session += 1;
    }

    /// Whether a flow started in `session` may still apply its results.
    pub fn is_current(&self, session: u64) -> bool {
        self.is_open && self.session == session
    }

    fn is_locked(&self) -> bool {
        self.in_flight || self.status.is_in_progress()
    }

    /// Changes the duration. Ignored while a checkout is in progress.
    pub fn select_duration(&mut self, months: u32) -> bool {
        if self.is_locked() {
            return false;
        }
        self.duration_months = months;
        true
    }

    /// Flips the workbook add-on. Ignored while a checkout is in progress.
    pub fn toggle_workbooks(&mut self) -> bool {
        if self.is_locked() {
            return false;
        }
        self.include_workbooks = !self.include_workbooks;
        true
    }

    pub fn breakdown(&self, offer: &ComboOffer) -> Result<PriceBreakdown, CheckoutError> {
        Ok(offer.quote(self.duration_months, self.include_workbooks)?)
    }

    /// Whether the confirm action is enabled.
    pub fn can_submit(&self, offer: &ComboOffer) -> bool {
        self.is_open
            && !self.in_flight
            && self.status == CheckoutStatus::Idle
            && self.breakdown(offer).is_ok()
    }

    /// Enters `Submitting`, the single gate for starting a checkout.
    pub fn begin_submit(&mut self, offer: &ComboOffer) -> Result<PriceBreakdown, CheckoutError> {
        if !self.is_open {
            return Err(CheckoutError::Closed);
        }
        if self.in_flight || self.status != CheckoutStatus::Idle {
            return Err(CheckoutError::Busy);
        }
        let breakdown = self.breakdown(offer)?;
        self.status = CheckoutStatus::Submitting;
        self.in_flight = true;
        Ok(breakdown)
    }

    /// Releases the instance-wide lock taken by `begin_submit`.
    pub fn end_flight(&mut self) {
        self.in_flight = false;
    }

    pub fn advance(&mut self, next: CheckoutStatus) -> Result<(), ValidationError> {
        self.status = self.status.transition_to(next)?;
        Ok(())
    }
}
