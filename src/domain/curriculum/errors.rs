//! Composer errors.

use thiserror::Error;

use super::ContentType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposerError {
    #[error("The topic composer is closed")]
    Closed,

    #[error("Please fill in the {0} field")]
    Incomplete(&'static str),

    #[error("Please enter valid iframe HTML code starting with <iframe")]
    InvalidIframe,

    #[error("Select a {0} first")]
    MissingParent(&'static str),

    #[error("Name is required")]
    BlankName,

    #[error("Another request is already in progress")]
    Busy,

    #[error("Uploads cannot be attached to {0:?} content")]
    UploadNotAccepted(ContentType),

    /// The selection changed while the request was in flight.
    #[error("Selection changed; result discarded")]
    Stale,

    #[error("{0}")]
    Remote(String),
}
