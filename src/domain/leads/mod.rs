//! Leads domain module.
//!
//! Demo-booking and contact payloads, and the record kept locally for each
//! lead before it is relayed to the CRM.

mod errors;
mod submission;

pub use errors::{LeadError, NETWORK_ERROR, SUBMIT_FALLBACK};
pub use submission::{
    DemoBooking, FormResponseRecord, FormStatus, FormType, LeadSubmission, DEMO_FORM_NAME,
    DEMO_TAGS, LEAD_SOURCE,
};
