//! File storage ports: uploading, and the admin listing/deletion API.

use async_trait::async_trait;

use crate::domain::upload::{LocalFile, StoredFile, UploadedFile};

use super::ApiError;

#[async_trait]
pub trait FileStorage: Send + Sync {
    /// `POST /api/upload` as multipart `file` + `folder`.
    async fn upload(&self, file: LocalFile, folder: &str) -> Result<UploadedFile, ApiError>;
}

/// The storage service's manage endpoint, authenticated by API key.
#[async_trait]
pub trait FileManager: Send + Sync {
    async fn list_files(&self, folder: &str) -> Result<Vec<StoredFile>, ApiError>;

    /// Permanently removes `folder/filename` from the storage service.
    async fn delete_file(&self, folder: &str, filename: &str) -> Result<(), ApiError>;
}
