//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Backend Ports
//!
//! - `PricingCatalog` - Program price lists
//! - `ComboOrderGateway` - Combo order creation and payment verification
//! - `CurriculumCatalog` - Program/unit/chapter lists and creation
//! - `FileStorage` / `FileManager` - Uploads and the storage manage API
//!
//! ## Client Capability Ports
//!
//! - `PaymentWidget` - Hosted checkout widget as a single awaited outcome
//! - `Notifier` - Toast-style user notifications
//!
//! ## Lead Ports
//!
//! - `LeadRelay` - Forwarding to the external forms endpoint
//! - `LeadRepository` - Best-effort local lead copies

mod api_error;
mod combo_order_gateway;
mod curriculum_catalog;
mod file_storage;
mod leads;
mod notifier;
mod payment_widget;
mod pricing_catalog;

pub use api_error::ApiError;
pub use combo_order_gateway::ComboOrderGateway;
pub use curriculum_catalog::{CreatedTopic, CurriculumCatalog};
pub use file_storage::{FileManager, FileStorage};
pub use leads::{LeadRelay, LeadRepository};
pub use notifier::{Notification, NotificationLevel, Notifier};
pub use payment_widget::{PaymentWidget, WidgetError};
pub use pricing_catalog::PricingCatalog;
