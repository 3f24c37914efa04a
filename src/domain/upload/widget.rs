//! Single-file upload widget state.

use super::{LocalFile, UploadError, UploadedFile};

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Size and type constraints of one widget instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadLimits {
    pub max_size_mb: u64,
    /// Value for the file picker's `accept` attribute.
    pub accept: String,
    /// Folder tag sent with every upload.
    pub folder: String,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_size_mb: 10,
            accept: "image/*,.pdf,.doc,.docx,.xls,.xlsx".to_string(),
            folder: "theolingua".to_string(),
        }
    }
}

impl UploadLimits {
    pub fn check(&self, file: &LocalFile) -> Result<(), UploadError> {
        if file.size() > self.max_size_mb * BYTES_PER_MB {
            return Err(UploadError::TooLarge {
                max_mb: self.max_size_mb,
                actual_bytes: file.size(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadState {
    pub uploading: bool,
    pub dragging: bool,
    pub uploaded: Option<UploadedFile>,
    pub preview: Option<String>,
}

impl UploadState {
    pub fn drag_over(&mut self) {
        self.dragging = true;
    }

    pub fn drag_leave(&mut self) {
        self.dragging = false;
    }

    /// Validates and enters the uploading state with an optimistic preview.
    pub fn begin(&mut self, limits: &UploadLimits, file: &LocalFile) -> Result<(), UploadError> {
        self.dragging = false;
        if self.uploading {
            return Err(UploadError::Busy);
        }
        limits.check(file)?;
        self.preview = file.preview_data_url();
        self.uploading = true;
        Ok(())
    }

    pub fn complete(&mut self, file: UploadedFile) {
        self.uploading = false;
        self.uploaded = Some(file);
    }

    /// A failed replacement also drops the previous file, so the widget
    /// never shows an old upload next to the failure.
    pub fn fail(&mut self) {
        self.uploading = false;
        self.uploaded = None;
        self.preview = None;
    }

    /// Forgets the local reference; the stored file is left alone.
    pub fn remove(&mut self) {
        self.uploaded = None;
        self.preview = None;
    }
}

/// Human-readable size: `B` below 1 KiB, then `KB` or `MB` to one decimal.
pub fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < BYTES_PER_MB {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / BYTES_PER_MB as f64)
    }
}
