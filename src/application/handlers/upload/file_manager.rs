//! FileManagerConsole - Controller for the admin files page.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{info, warn};

use crate::domain::upload::{FileListing, StoredFile, UploadError};
use crate::ports::{FileManager, Notification, Notifier};

pub struct FileManagerConsole {
    manager: Arc<dyn FileManager>,
    notifier: Arc<dyn Notifier>,
    folder: String,
    state: Mutex<FileListing>,
}

impl FileManagerConsole {
    pub fn new(
        manager: Arc<dyn FileManager>,
        notifier: Arc<dyn Notifier>,
        folder: impl Into<String>,
    ) -> Self {
        Self {
            manager,
            notifier,
            folder: folder.into(),
            state: Mutex::new(FileListing::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, FileListing> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn folder(&self) -> &str {
        &self.folder
    }

    pub fn snapshot(&self) -> FileListing {
        self.state().clone()
    }

    pub fn set_query(&self, query: impl Into<String>) {
        self.state().query = query.into();
    }

    /// Files matching the current search.
    pub fn visible_files(&self) -> Vec<StoredFile> {
        self.state().filtered().into_iter().cloned().collect()
    }

    pub async fn refresh(&self) -> Result<(), UploadError> {
        self.state().loading = true;
        let result = self.manager.list_files(&self.folder).await;
        self.state().loading = false;

        match result {
            Ok(files) => {
                info!(folder = %self.folder, count = files.len(), "Files loaded");
                self.state().files = files;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, folder = %self.folder, "Failed to load files");
                let message = if e.is_transport() {
                    "Error loading files"
                } else {
                    "Failed to load files"
                };
                self.notifier.notify(Notification::error(message));
                Err(UploadError::rejected(message))
            }
        }
    }

    /// Deletes a file and reloads the listing. One delete at a time.
    ///
    /// The caller is responsible for asking the user to confirm first.
    pub async fn delete(&self, file: &StoredFile) -> Result<(), UploadError> {
        {
            let mut state = self.state();
            if state.deleting.is_some() {
                return Err(UploadError::Busy);
            }
            state.deleting = Some(file.key());
        }

        let result = self.manager.delete_file(&file.folder, &file.filename).await;
        self.state().deleting = None;

        match result {
            Ok(()) => {
                info!(file = %file.key(), "File deleted");
                self.notifier.notify(Notification::success("File deleted"));
                self.refresh().await
            }
            Err(e) => {
                warn!(error = %e, file = %file.key(), "Failed to delete file");
                let message = if e.is_transport() {
                    "Error deleting file".to_string()
                } else {
                    e.message_or("Failed to delete file")
                };
                self.notifier.notify(Notification::error(message.clone()));
                Err(UploadError::rejected(message))
            }
        }
    }
}
