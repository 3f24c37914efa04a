//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `backend` - REST backend client (pricing, payments, curriculum, uploads) and its mock
//! - `razorpay` - Payment widget bridge and a scripted widget for tests
//! - `leads` - Lead relay over HTTP, Postgres and in-memory lead storage
//! - `notify` - Notification sinks
//! - `http` - The forms relay server

pub mod backend;
pub mod http;
pub mod leads;
pub mod notify;
pub mod razorpay;

pub use backend::{BackendClient, BackendClientConfig, MockBackend};
pub use leads::{HttpLeadRelay, InMemoryLeadRepository, MockLeadRelay, PostgresLeadRepository};
pub use notify::{RecordingNotifier, TracingNotifier};
pub use razorpay::{ChannelPaymentWidget, ScriptedPaymentWidget, WidgetRequest};
