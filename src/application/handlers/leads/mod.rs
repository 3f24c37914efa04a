//! Lead capture handlers.
//!
//! ## Commands
//! - Relaying a lead (server side of `POST /api/forms`)
//! - Submitting the "book a demo" form (client side)

mod book_demo;
mod relay_lead;

pub use book_demo::BookDemoHandler;
pub use relay_lead::{RelayLeadCommand, RelayLeadHandler, RelayLeadResult};
