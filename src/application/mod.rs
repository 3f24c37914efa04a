//! Application layer - Commands, Queries, Controllers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Controllers own their state exclusively; each network result is applied
//! only if the controller is still mounted and the result still relevant.

pub mod handlers;
mod mount_guard;

pub use handlers::checkout::{
    CheckoutOutcome, CheckoutSettings, ComboCheckoutDialog, LoadComboOfferHandler,
    LoadComboOfferQuery, LoadComboOfferResult,
};
pub use handlers::curriculum::TopicComposer;
pub use handlers::leads::{BookDemoHandler, RelayLeadCommand, RelayLeadHandler, RelayLeadResult};
pub use handlers::upload::{FileManagerConsole, FileUploadWidget};
pub use mount_guard::MountGuard;
