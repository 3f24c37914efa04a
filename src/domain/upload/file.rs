//! Local files, upload results and stored-file listings.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// A file picked by the user, not yet uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl LocalFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }

    /// Inline preview for images, `None` for everything else.
    pub fn preview_data_url(&self) -> Option<String> {
        self.is_image()
            .then(|| format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes)))
    }
}

/// Descriptor returned by the upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub filename: String,
    pub url: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Document,
}

/// A file already in the storage service, as listed by the manage endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFile {
    pub folder: String,
    pub filename: String,
    pub size: u64,
    /// Unix seconds.
    pub modified: i64,
    pub url: String,
}

impl StoredFile {
    /// Classified by extension, since listings carry no MIME type.
    pub fn kind(&self) -> FileKind {
        let ext = self
            .filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            FileKind::Image
        } else {
            FileKind::Document
        }
    }

    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.modified, 0).single()
    }

    /// `folder/filename`, the key used to mark a delete in progress.
    pub fn key(&self) -> String {
        format!("{}/{}", self.folder, self.filename)
    }
}
