//! Pricing domain module.
//!
//! Plans, per-program price lists and the combo price calculator.

mod calculator;
mod combo;
mod errors;
mod plan;

pub use calculator::{calculate, PriceBreakdown, DEFAULT_WORKBOOK_NOTE};
pub use combo::{ComboOffer, PlanPair};
pub use errors::PricingError;
pub use plan::{Plan, ProgramPricing};
