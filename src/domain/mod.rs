//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (money, percentages, IDs, errors)
//! - `pricing` - Plans, program price lists and the combo price calculator
//! - `checkout` - Combo order wire types and checkout dialog state
//! - `curriculum` - Topic drafts and the cascading topic composer state
//! - `upload` - Upload widget state and the admin file listing
//! - `leads` - Demo-booking and contact lead payloads

pub mod checkout;
pub mod curriculum;
pub mod foundation;
pub mod leads;
pub mod pricing;
pub mod upload;
