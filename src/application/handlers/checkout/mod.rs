//! Checkout handlers.
//!
//! - Loading the combo offer (both programs' price lists)
//! - The combo checkout dialog controller

mod combo_checkout;
mod load_combo_offer;

pub use combo_checkout::{CheckoutOutcome, CheckoutSettings, ComboCheckoutDialog, SuccessCallback};
pub use load_combo_offer::{LoadComboOfferHandler, LoadComboOfferQuery, LoadComboOfferResult};
