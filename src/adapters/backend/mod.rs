//! REST backend adapters.
//!
//! - `BackendClient` - reqwest client for pricing, payments, curriculum and uploads
//! - `MockBackend` - in-memory implementation for tests

mod client;
mod mock;

pub use client::{BackendClient, BackendClientConfig};
pub use mock::{MethodCall, MockBackend};
