//! Upload and file manager configuration

use secrecy::Secret;
use serde::Deserialize;

use super::backend::is_http_url;
use super::error::ValidationError;
use crate::domain::upload::UploadLimits;

#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// Maximum file size in megabytes
    #[serde(default = "default_max_size_mb")]
    pub max_size_mb: u64,

    /// Folder tag sent with every upload
    #[serde(default = "default_folder")]
    pub folder: String,

    /// File picker accept list
    #[serde(default = "default_accept")]
    pub accept: String,

    /// Storage service manage endpoint (list/delete)
    pub file_manager_url: Option<String>,

    /// API key for the manage endpoint
    pub file_manager_api_key: Option<Secret<String>>,
}

impl UploadConfig {
    pub fn limits(&self) -> UploadLimits {
        UploadLimits {
            max_size_mb: self.max_size_mb,
            accept: self.accept.clone(),
            folder: self.folder.clone(),
        }
    }

    /// True when both the manage URL and its key are present.
    pub fn has_file_manager(&self) -> bool {
        self.file_manager_url.is_some() && self.file_manager_api_key.is_some()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_size_mb == 0 || self.max_size_mb > 100 {
            return Err(ValidationError::InvalidUploadLimit);
        }
        if self.folder.trim().is_empty() {
            return Err(ValidationError::EmptyUploadFolder);
        }
        if let Some(url) = &self.file_manager_url {
            if !is_http_url(url) {
                return Err(ValidationError::InvalidUrl("upload.file_manager_url"));
            }
            if self.file_manager_api_key.is_none() {
                return Err(ValidationError::MissingRequired("UPLOAD__FILE_MANAGER_API_KEY"));
            }
        }
        Ok(())
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_size_mb: default_max_size_mb(),
            folder: default_folder(),
            accept: default_accept(),
            file_manager_url: None,
            file_manager_api_key: None,
        }
    }
}

fn default_max_size_mb() -> u64 {
    10
}

fn default_folder() -> String {
    "theolingua".to_string()
}

fn default_accept() -> String {
    "image/*,.pdf,.doc,.docx,.xls,.xlsx".to_string()
}
