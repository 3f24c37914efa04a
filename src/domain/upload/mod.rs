//! Upload domain module.
//!
//! The single-file upload widget state and the admin file listing.

mod errors;
mod file;
mod listing;
mod widget;

pub use errors::{UploadError, UPLOAD_FALLBACK};
pub use file::{FileKind, LocalFile, StoredFile, UploadedFile};
pub use listing::FileListing;
pub use widget::{format_file_size, UploadLimits, UploadState};
