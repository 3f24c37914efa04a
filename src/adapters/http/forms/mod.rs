//! HTTP adapter for the forms relay.

mod dto;
mod handlers;
mod routes;

pub use dto::{FormsErrorResponse, HealthResponse};
pub use handlers::{FormsApiError, FormsAppState};
pub use routes::forms_router;
