//! Pricing errors.

use thiserror::Error;

use crate::domain::foundation::{Percentage, ProgramId};

/// Reasons a combo price cannot be quoted.
///
/// Every variant means "unavailable": the checkout action must be disabled
/// rather than guessing a price.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("No plan pair is offered for {duration_months} months")]
    NoMatchingPlans { duration_months: u32 },

    #[error("Program {program} offers more than one plan for {duration_months} months")]
    AmbiguousPlan {
        program: ProgramId,
        duration_months: u32,
    },

    #[error("Plans cover different durations ({basics} vs {advanced} months)")]
    DurationMismatch { basics: u32, advanced: u32 },

    #[error("Combo discount differs between programs ({basics} vs {advanced})")]
    DiscountMismatch {
        basics: Percentage,
        advanced: Percentage,
    },

    #[error("Combo total is too large to quote")]
    AmountOverflow,
}
