//! Application handlers.
//!
//! Command/query handlers and the stateful controllers that orchestrate
//! domain state against the ports.

pub mod checkout;
pub mod curriculum;
pub mod leads;
pub mod upload;
