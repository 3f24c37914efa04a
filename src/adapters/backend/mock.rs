//! Mock backend for testing.
//!
//! Implements every REST backend port in memory. Supports:
//! - Pre-configured pricing, orders and curriculum lists
//! - An in-memory file store for the manage endpoint
//! - Per-method error injection
//! - Call tracking
//!
//! Each call yields once to the scheduler before answering, so concurrent
//! callers interleave the way they would against a real server.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::json;

use crate::domain::checkout::{ComboOrder, ComboOrderRequest, VerifyPaymentRequest};
use crate::domain::curriculum::{CatalogItem, NewChapter, NewUnit, TopicDraft};
use crate::domain::foundation::{ChapterId, Paise, ProgramId, TopicId, UnitId};
use crate::domain::pricing::ProgramPricing;
use crate::domain::upload::{LocalFile, StoredFile, UploadedFile};
use crate::ports::{
    ApiError, ComboOrderGateway, CreatedTopic, CurriculumCatalog, FileManager, FileStorage,
    PricingCatalog,
};

/// Mock backend for testing.
///
/// # Example
///
/// ```ignore
/// let backend = Arc::new(MockBackend::new());
/// backend.set_pricing("theolingua-basics", pricing);
/// backend.fail_method("verify_payment", ApiError::rejected(400, None));
///
/// // ... drive a controller ...
///
/// assert_eq!(backend.call_count("create_combo_order"), 1);
/// ```
#[derive(Default, Clone)]
pub struct MockBackend {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    pricing: HashMap<String, ProgramPricing>,
    next_order: Option<ComboOrder>,
    programs: Vec<CatalogItem<ProgramId>>,
    units: HashMap<ProgramId, Vec<CatalogItem<UnitId>>>,
    chapters: HashMap<UnitId, Vec<CatalogItem<ChapterId>>>,
    files: Vec<StoredFile>,
    created: u64,
    method_errors: HashMap<String, ApiError>,
    call_log: Vec<MethodCall>,
}

/// Recorded method call for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodCall {
    pub method: String,
    pub args: Vec<String>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    pub fn set_pricing(&self, slug: &str, pricing: ProgramPricing) {
        self.state().pricing.insert(slug.to_string(), pricing);
    }

    /// Order returned by every `create_combo_order` call.
    pub fn set_order(&self, order: ComboOrder) {
        self.state().next_order = Some(order);
    }

    pub fn set_programs(&self, programs: Vec<CatalogItem<ProgramId>>) {
        self.state().programs = programs;
    }

    pub fn set_units(&self, program: ProgramId, units: Vec<CatalogItem<UnitId>>) {
        self.state().units.insert(program, units);
    }

    pub fn set_chapters(&self, unit: UnitId, chapters: Vec<CatalogItem<ChapterId>>) {
        self.state().chapters.insert(unit, chapters);
    }

    pub fn add_stored_file(&self, file: StoredFile) {
        self.state().files.push(file);
    }

    /// Make every call to `method` fail with `error`.
    pub fn fail_method(&self, method: &str, error: ApiError) {
        self.state().method_errors.insert(method.to_string(), error);
    }

    pub fn clear_errors(&self) {
        self.state().method_errors.clear();
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    pub fn calls(&self) -> Vec<MethodCall> {
        self.state().call_log.clone()
    }

    pub fn calls_to(&self, method: &str) -> Vec<MethodCall> {
        self.state()
            .call_log
            .iter()
            .filter(|c| c.method == method)
            .cloned()
            .collect()
    }

    /// Names of the recorded calls, in order.
    pub fn method_names(&self) -> Vec<String> {
        self.state()
            .call_log
            .iter()
            .map(|c| c.method.clone())
            .collect()
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.state()
            .call_log
            .iter()
            .filter(|c| c.method == method)
            .count()
    }

    pub fn stored_files(&self) -> Vec<StoredFile> {
        self.state().files.clone()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Internal Helpers
    // ════════════════════════════════════════════════════════════════════════════

    async fn begin(&self, method: &str, args: Vec<String>) -> Result<(), ApiError> {
        self.state().call_log.push(MethodCall {
            method: method.to_string(),
            args,
        });
        tokio::task::yield_now().await;

        match self.state().method_errors.get(method) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn next_id(&self, prefix: &str) -> String {
        let mut state = self.state();
        state.created += 1;
        format!("{}-{}", prefix, state.created)
    }
}

#[async_trait]
impl PricingCatalog for MockBackend {
    async fn program_pricing(&self, slug: &str) -> Result<ProgramPricing, ApiError> {
        self.begin("program_pricing", vec![slug.to_string()]).await?;

        self.state()
            .pricing
            .get(slug)
            .cloned()
            .ok_or_else(|| ApiError::rejected(404, Some(format!("Program not found: {}", slug))))
    }
}

#[async_trait]
impl ComboOrderGateway for MockBackend {
    async fn create_combo_order(&self, request: ComboOrderRequest) -> Result<ComboOrder, ApiError> {
        self.begin(
            "create_combo_order",
            vec![
                request.basics_class_id.to_string(),
                request.advanced_class_id.to_string(),
                request.duration_months.to_string(),
                request.gateway.clone(),
                request.include_workbooks.to_string(),
            ],
        )
        .await?;

        let configured = self.state().next_order.clone();
        Ok(configured.unwrap_or_else(|| ComboOrder {
            id: self.next_id("order_mock"),
            amount: Paise::new(0),
            currency: "INR".to_string(),
            key_id: "rzp_test_mock".to_string(),
            metadata: json!({
                "basicsClassId": request.basics_class_id,
                "advancedClassId": request.advanced_class_id,
                "durationMonths": request.duration_months,
            }),
        }))
    }

    async fn verify_payment(&self, request: VerifyPaymentRequest) -> Result<(), ApiError> {
        self.begin(
            "verify_payment",
            vec![
                request.receipt.razorpay_payment_id.clone(),
                request.receipt.razorpay_order_id.clone(),
            ],
        )
        .await
    }
}

#[async_trait]
impl CurriculumCatalog for MockBackend {
    async fn list_programs(&self) -> Result<Vec<CatalogItem<ProgramId>>, ApiError> {
        self.begin("list_programs", vec![]).await?;
        Ok(self.state().programs.clone())
    }

    async fn list_units(&self, program: ProgramId) -> Result<Vec<CatalogItem<UnitId>>, ApiError> {
        self.begin("list_units", vec![program.to_string()]).await?;
        Ok(self.state().units.get(&program).cloned().unwrap_or_default())
    }

    async fn list_chapters(&self, unit: &UnitId) -> Result<Vec<CatalogItem<ChapterId>>, ApiError> {
        self.begin("list_chapters", vec![unit.to_string()]).await?;
        Ok(self.state().chapters.get(unit).cloned().unwrap_or_default())
    }

    async fn create_unit(&self, unit: NewUnit) -> Result<CatalogItem<UnitId>, ApiError> {
        self.begin(
            "create_unit",
            vec![unit.id.to_string(), unit.name.clone(), unit.class_id.to_string()],
        )
        .await?;

        let created = CatalogItem {
            id: unit.id,
            name: unit.name,
        };
        self.state()
            .units
            .entry(unit.class_id)
            .or_default()
            .push(created.clone());
        Ok(created)
    }

    async fn create_chapter(
        &self,
        chapter: NewChapter,
    ) -> Result<CatalogItem<ChapterId>, ApiError> {
        self.begin(
            "create_chapter",
            vec![chapter.name.clone(), chapter.subject_id.to_string()],
        )
        .await?;

        let id = ChapterId::new(self.next_id("chapter"))
            .map_err(|e| ApiError::decode(e.to_string()))?;
        let created = CatalogItem {
            id,
            name: chapter.name,
        };
        self.state()
            .chapters
            .entry(chapter.subject_id)
            .or_default()
            .push(created.clone());
        Ok(created)
    }

    async fn create_topic(&self, draft: TopicDraft) -> Result<CreatedTopic, ApiError> {
        self.begin(
            "create_topic",
            vec![draft.name.clone(), draft.chapter_id.to_string()],
        )
        .await?;

        let id =
            TopicId::new(self.next_id("topic")).map_err(|e| ApiError::decode(e.to_string()))?;
        Ok(CreatedTopic {
            id,
            name: draft.name,
        })
    }
}

#[async_trait]
impl FileStorage for MockBackend {
    async fn upload(&self, file: LocalFile, folder: &str) -> Result<UploadedFile, ApiError> {
        self.begin("upload", vec![file.name.clone(), folder.to_string()])
            .await?;

        let url = format!("https://files.example.com/{}/{}", folder, file.name);
        let size = file.size();
        self.state().files.push(StoredFile {
            folder: folder.to_string(),
            filename: file.name.clone(),
            size,
            modified: chrono::Utc::now().timestamp(),
            url: url.clone(),
        });

        Ok(UploadedFile {
            filename: file.name,
            url,
            size,
            mime: file.mime,
        })
    }
}

#[async_trait]
impl FileManager for MockBackend {
    async fn list_files(&self, folder: &str) -> Result<Vec<StoredFile>, ApiError> {
        self.begin("list_files", vec![folder.to_string()]).await?;

        Ok(self
            .state()
            .files
            .iter()
            .filter(|f| f.folder == folder)
            .cloned()
            .collect())
    }

    async fn delete_file(&self, folder: &str, filename: &str) -> Result<(), ApiError> {
        self.begin(
            "delete_file",
            vec![folder.to_string(), filename.to_string()],
        )
        .await?;

        let mut state = self.state();
        let before = state.files.len();
        state
            .files
            .retain(|f| !(f.folder == folder && f.filename == filename));
        if state.files.len() == before {
            return Err(ApiError::rejected(404, Some("File not found".to_string())));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_slug_is_not_found() {
        let backend = MockBackend::new();
        let err = backend.program_pricing("missing").await.unwrap_err();
        assert!(matches!(err, ApiError::Rejected { status: 404, .. }));
        assert_eq!(backend.method_names(), vec!["program_pricing"]);
    }

    #[tokio::test]
    async fn injected_error_is_returned_after_recording() {
        let backend = MockBackend::new();
        backend.fail_method("list_programs", ApiError::transport("down"));

        assert_eq!(
            backend.list_programs().await,
            Err(ApiError::transport("down"))
        );
        assert_eq!(backend.call_count("list_programs"), 1);

        backend.clear_errors();
        assert_eq!(backend.list_programs().await, Ok(vec![]));
    }

    #[tokio::test]
    async fn uploaded_file_shows_up_in_listing() {
        let backend = MockBackend::new();
        backend
            .upload(
                LocalFile::new("a.pdf", "application/pdf", vec![0; 12]),
                "theolingua",
            )
            .await
            .unwrap();

        let files = backend.list_files("theolingua").await.unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].size, 12);
        assert!(backend.list_files("other").await.unwrap().is_empty());

        backend.delete_file("theolingua", "a.pdf").await.unwrap();
        assert!(backend.stored_files().is_empty());
    }

    #[tokio::test]
    async fn deleting_missing_file_is_rejected() {
        let backend = MockBackend::new();
        let err = backend.delete_file("theolingua", "ghost.png").await.unwrap_err();
        assert_eq!(err.message_or("x"), "File not found");
    }
}
