//! FileUploadWidget - Controller for the single-file uploader.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{info, warn};

use crate::application::MountGuard;
use crate::domain::upload::{
    format_file_size, LocalFile, UploadError, UploadLimits, UploadState, UploadedFile,
    UPLOAD_FALLBACK,
};
use crate::ports::{FileStorage, Notification, Notifier};

/// Invoked with the stored file's descriptor after a successful upload.
pub type UploadCompleteCallback = Arc<dyn Fn(&UploadedFile) + Send + Sync>;

pub struct FileUploadWidget {
    storage: Arc<dyn FileStorage>,
    notifier: Arc<dyn Notifier>,
    limits: UploadLimits,
    on_complete: Option<UploadCompleteCallback>,
    state: Mutex<UploadState>,
    mount: MountGuard,
}

impl FileUploadWidget {
    pub fn new(
        storage: Arc<dyn FileStorage>,
        notifier: Arc<dyn Notifier>,
        limits: UploadLimits,
    ) -> Self {
        Self {
            storage,
            notifier,
            limits,
            on_complete: None,
            state: Mutex::new(UploadState::default()),
            mount: MountGuard::new(),
        }
    }

    pub fn with_complete_callback(mut self, callback: UploadCompleteCallback) -> Self {
        self.on_complete = Some(callback);
        self
    }

    fn state(&self) -> MutexGuard<'_, UploadState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn limits(&self) -> &UploadLimits {
        &self.limits
    }

    pub fn snapshot(&self) -> UploadState {
        self.state().clone()
    }

    pub fn unmount(&self) {
        self.mount.unmount();
    }

    pub fn drag_over(&self) {
        self.state().drag_over();
    }

    pub fn drag_leave(&self) {
        self.state().drag_leave();
    }

    /// Handles a file chosen through the browse dialog.
    pub async fn select_file(&self, file: LocalFile) -> Result<UploadedFile, UploadError> {
        self.upload(file).await
    }

    /// Handles a file dropped onto the widget.
    pub async fn drop_file(&self, file: LocalFile) -> Result<UploadedFile, UploadError> {
        self.upload(file).await
    }

    async fn upload(&self, file: LocalFile) -> Result<UploadedFile, UploadError> {
        if let Err(e) = self.state().begin(&self.limits, &file) {
            if e != UploadError::Busy {
                self.notifier.notify(Notification::error(e.to_string()));
            }
            return Err(e);
        }

        info!(
            filename = %file.name,
            mime = %file.mime,
            size = %format_file_size(file.size()),
            folder = %self.limits.folder,
            "Uploading file"
        );
        self.notifier.notify(Notification::info("Uploading file..."));

        match self.storage.upload(file, &self.limits.folder).await {
            Ok(uploaded) => {
                if self.mount.is_mounted() {
                    self.state().complete(uploaded.clone());
                    self.notifier
                        .notify(Notification::success("File uploaded successfully!"));
                    if let Some(callback) = &self.on_complete {
                        callback(&uploaded);
                    }
                }
                Ok(uploaded)
            }
            Err(e) => {
                warn!(error = %e, "Upload failed");
                let err = if e.is_transport() {
                    UploadError::Transport
                } else {
                    UploadError::rejected(e.message_or("Upload failed"))
                };
                if self.mount.is_mounted() {
                    self.state().fail();
                    self.notifier.notify(Notification::error(err.to_string()));
                }
                Err(err)
            }
        }
    }

    /// Forgets the uploaded file locally; it stays on the storage service.
    pub fn remove(&self) {
        self.state().remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::adapters::backend::MockBackend;
    use crate::adapters::notify::RecordingNotifier;
    use crate::ports::{ApiError, NotificationLevel};

    fn test_widget(backend: Arc<MockBackend>) -> (FileUploadWidget, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        let limits = UploadLimits {
            max_size_mb: 1,
            ..UploadLimits::default()
        };
        (
            FileUploadWidget::new(backend, notifier.clone(), limits),
            notifier,
        )
    }

    fn pdf(len: usize) -> LocalFile {
        LocalFile::new("lesson.pdf", "application/pdf", vec![7; len])
    }

    #[tokio::test]
    async fn oversized_file_makes_no_network_call() {
        let backend = Arc::new(MockBackend::new());
        let (widget, notifier) = test_widget(backend.clone());

        let err = widget.select_file(pdf(1024 * 1024 + 1)).await.unwrap_err();

        assert!(matches!(err, UploadError::TooLarge { max_mb: 1, .. }));
        assert!(backend.calls().is_empty());
        assert_eq!(
            notifier.last().unwrap().message,
            "File too large. Maximum size: 1MB"
        );
    }

    #[tokio::test]
    async fn upload_stores_descriptor_and_calls_back() {
        let backend = Arc::new(MockBackend::new());
        let (widget, notifier) = test_widget(backend.clone());
        let completed = Arc::new(AtomicUsize::new(0));
        let counter = completed.clone();
        let widget = widget.with_complete_callback(Arc::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        let uploaded = widget.drop_file(pdf(2048)).await.unwrap();

        assert_eq!(uploaded.filename, "lesson.pdf");
        assert_eq!(uploaded.size, 2048);
        assert_eq!(widget.snapshot().uploaded, Some(uploaded));
        assert!(!widget.snapshot().uploading);
        assert_eq!(completed.load(Ordering::SeqCst), 1);
        assert_eq!(backend.calls_to("upload")[0].args, vec!["lesson.pdf", "theolingua"]);
        assert_eq!(notifier.last().unwrap().level, NotificationLevel::Success);
    }

    #[tokio::test]
    async fn rejected_upload_clears_preview() {
        let backend = Arc::new(MockBackend::new());
        backend.fail_method(
            "upload",
            ApiError::rejected(415, Some("Unsupported file type".into())),
        );
        let (widget, notifier) = test_widget(backend);

        let err = widget
            .select_file(LocalFile::new("a.png", "image/png", vec![1, 2]))
            .await
            .unwrap_err();

        assert_eq!(err, UploadError::Rejected("Unsupported file type".into()));
        assert_eq!(widget.snapshot().preview, None);
        assert_eq!(notifier.last().unwrap().message, "Unsupported file type");
    }

    #[tokio::test]
    async fn transport_failure_uses_generic_message() {
        let backend = Arc::new(MockBackend::new());
        backend.fail_method("upload", ApiError::transport("reset"));
        let (widget, notifier) = test_widget(backend);

        widget.select_file(pdf(10)).await.unwrap_err();

        assert_eq!(notifier.last().unwrap().message, UPLOAD_FALLBACK);
    }

    #[tokio::test]
    async fn remove_forgets_without_remote_delete() {
        let backend = Arc::new(MockBackend::new());
        let (widget, _) = test_widget(backend.clone());
        widget.select_file(pdf(10)).await.unwrap();

        widget.remove();

        assert_eq!(widget.snapshot().uploaded, None);
        assert_eq!(backend.call_count("delete_file"), 0);
    }

    #[tokio::test]
    async fn concurrent_upload_is_busy() {
        let backend = Arc::new(MockBackend::new());
        let (widget, _) = test_widget(backend.clone());

        let (first, second) = tokio::join!(widget.select_file(pdf(10)), widget.select_file(pdf(20)));

        assert!(first.is_ok());
        assert_eq!(second, Err(UploadError::Busy));
        assert_eq!(backend.call_count("upload"), 1);
    }
}
