//! Upload handlers.
//!
//! - The single-file upload widget controller
//! - The admin file manager console

mod file_manager;
mod file_upload;

pub use file_manager::FileManagerConsole;
pub use file_upload::{FileUploadWidget, UploadCompleteCallback};
