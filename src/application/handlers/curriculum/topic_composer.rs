//! TopicComposer - Controller for the admin "add topic" dialog.
//!
//! Program selection loads units, unit selection loads chapters. Units and
//! chapters can also be created inline. Remote failures become notifications;
//! the form stays open so the admin can retry.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use crate::application::MountGuard;
use crate::domain::curriculum::{
    ComposerError, ComposerState, ContentType, Generation, TopicContent, TopicType,
};
use crate::domain::foundation::{ChapterId, ProgramId, UnitId};
use crate::domain::upload::UploadedFile;
use crate::ports::{ApiError, CreatedTopic, CurriculumCatalog, Notification, Notifier};

/// Invoked after a topic is created, e.g. to refresh the topic table.
pub type TopicCreatedCallback = Arc<dyn Fn(&CreatedTopic) + Send + Sync>;

pub struct TopicComposer {
    catalog: Arc<dyn CurriculumCatalog>,
    notifier: Arc<dyn Notifier>,
    on_created: Option<TopicCreatedCallback>,
    state: Mutex<ComposerState>,
    mount: MountGuard,
}

fn remote(e: &ApiError, fallback: &str) -> ComposerError {
    ComposerError::Remote(e.message_or(fallback))
}

impl TopicComposer {
    pub fn new(catalog: Arc<dyn CurriculumCatalog>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            catalog,
            notifier,
            on_created: None,
            state: Mutex::new(ComposerState::default()),
            mount: MountGuard::new(),
        }
    }

    pub fn with_created_callback(mut self, callback: TopicCreatedCallback) -> Self {
        self.on_created = Some(callback);
        self
    }

    fn state(&self) -> MutexGuard<'_, ComposerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies `f` only while the composer is still mounted.
    fn apply<T>(&self, f: impl FnOnce(&mut ComposerState) -> T) -> Option<T> {
        if !self.mount.is_mounted() {
            return None;
        }
        Some(f(&mut self.state()))
    }

    pub fn snapshot(&self) -> ComposerState {
        self.state().clone()
    }

    pub fn can_submit(&self) -> bool {
        self.state().can_submit()
    }

    pub fn unmount(&self) {
        self.mount.unmount();
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Cascading selection
    // ════════════════════════════════════════════════════════════════════════════

    /// Opens a blank composer and loads the program list.
    pub async fn open(&self) -> Result<(), ComposerError> {
        let generation = self.state().open();
        match self.catalog.list_programs().await {
            Ok(programs) => {
                debug!(count = programs.len(), "Programs loaded");
                self.apply(|s| s.apply_programs(generation, programs));
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to load programs");
                Err(self.report(remote(&e, "Failed to load programs")))
            }
        }
    }

    pub fn close(&self) {
        self.state().close();
    }

    pub async fn select_program(&self, program: ProgramId) -> Result<(), ComposerError> {
        let generation = self.state().select_program(program);
        match self.catalog.list_units(program).await {
            Ok(units) => {
                let applied = self.apply(|s| s.apply_units(generation, units));
                debug!(program = %program, applied = ?applied, "Units loaded");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, program = %program, "Failed to load units");
                Err(self.report(remote(&e, "Failed to load units")))
            }
        }
    }

    pub async fn select_unit(&self, unit: UnitId) -> Result<(), ComposerError> {
        let generation = self.state().select_unit(unit.clone());
        self.load_chapters(unit, generation).await
    }

    async fn load_chapters(&self, unit: UnitId, generation: Generation) -> Result<(), ComposerError> {
        match self.catalog.list_chapters(&unit).await {
            Ok(chapters) => {
                let applied = self.apply(|s| s.apply_chapters(generation, chapters));
                debug!(unit = %unit, applied = ?applied, "Chapters loaded");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, unit = %unit, "Failed to load chapters");
                Err(self.report(remote(&e, "Failed to load chapters")))
            }
        }
    }

    pub fn select_chapter(&self, chapter: ChapterId) {
        self.state().select_chapter(chapter);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Topic fields
    // ════════════════════════════════════════════════════════════════════════════

    pub fn set_name(&self, name: impl Into<String>) {
        self.state().set_name(name);
    }

    pub fn set_type(&self, topic_type: Option<TopicType>) {
        self.state().set_type(topic_type);
    }

    pub fn set_duration(&self, duration: impl Into<String>) {
        self.state().set_duration(duration);
    }

    pub fn set_order_index(&self, order_index: u32) {
        self.state().set_order_index(order_index);
    }

    pub fn set_content_type(&self, kind: ContentType) {
        self.state().set_content_type(kind);
    }

    pub fn set_content(&self, content: TopicContent) {
        self.state().set_content(content);
    }

    /// Puts a finished upload into the video or PDF payload.
    pub fn attach_upload(&self, file: &UploadedFile) -> Result<(), ComposerError> {
        let result = self.state().attach_upload(file.url.clone());
        match &result {
            Ok(()) => self
                .notifier
                .notify(Notification::success(format!("{} attached", file.filename))),
            Err(e) => self.notifier.notify(Notification::error(e.to_string())),
        }
        result
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Inline creation
    // ════════════════════════════════════════════════════════════════════════════

    pub fn open_unit_form(&self) -> bool {
        self.state().open_unit_form()
    }

    pub fn set_new_unit_name(&self, name: impl Into<String>) {
        self.state().set_new_unit_name(name);
    }

    pub fn cancel_unit_form(&self) {
        self.state().cancel_unit_form();
    }

    /// Creates a unit under the selected program and selects it.
    pub async fn create_unit(&self) -> Result<(), ComposerError> {
        let (body, generation) = self.state().begin_create_unit()?;
        info!(unit_id = %body.id, name = %body.name, program = %body.class_id, "Creating unit");

        let created = match self.catalog.create_unit(body).await {
            Ok(created) => created,
            Err(e) => {
                warn!(error = %e, "Unit creation failed");
                self.apply(|s| s.fail_create_unit());
                return Err(self.report(remote(&e, "Failed to create unit")));
            }
        };

        let unit = created.id.clone();
        match self.apply(|s| s.finish_create_unit(generation, created)) {
            Some(Ok(chapter_generation)) => self.load_chapters(unit, chapter_generation).await,
            Some(Err(e)) => Err(e),
            None => Ok(()),
        }
    }

    pub fn open_chapter_form(&self) -> bool {
        self.state().open_chapter_form()
    }

    pub fn set_new_chapter_name(&self, name: impl Into<String>) {
        self.state().set_new_chapter_name(name);
    }

    pub fn cancel_chapter_form(&self) {
        self.state().cancel_chapter_form();
    }

    /// Creates a chapter under the selected unit and selects it.
    pub async fn create_chapter(&self) -> Result<(), ComposerError> {
        let (body, generation) = self.state().begin_create_chapter()?;
        info!(name = %body.name, unit = %body.subject_id, "Creating chapter");

        match self.catalog.create_chapter(body).await {
            Ok(created) => self
                .apply(|s| s.finish_create_chapter(generation, created))
                .unwrap_or(Ok(())),
            Err(e) => {
                warn!(error = %e, "Chapter creation failed");
                self.apply(|s| s.fail_create_chapter());
                Err(self.report(remote(&e, "Failed to create chapter")))
            }
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Submission
    // ════════════════════════════════════════════════════════════════════════════

    /// Posts the draft. On success the composer closes and resets.
    pub async fn submit(&self) -> Result<CreatedTopic, ComposerError> {
        let draft = match self.state().begin_submit() {
            Ok(draft) => draft,
            Err(ComposerError::Busy) => return Err(ComposerError::Busy),
            Err(e) => return Err(self.report(e)),
        };
        info!(name = %draft.name, chapter = %draft.chapter_id, "Creating topic");

        match self.catalog.create_topic(draft).await {
            Ok(topic) => {
                if self.apply(|s| s.close()).is_some() {
                    self.notifier.notify(Notification::success("Topic created"));
                    if let Some(callback) = &self.on_created {
                        callback(&topic);
                    }
                }
                Ok(topic)
            }
            Err(e) => {
                warn!(error = %e, "Topic creation failed");
                self.apply(|s| s.fail_submit());
                Err(self.report(remote(&e, "Failed to create topic")))
            }
        }
    }

    fn report(&self, err: ComposerError) -> ComposerError {
        if self.mount.is_mounted() {
            self.notifier.notify(Notification::error(err.to_string()));
        }
        err
    }
}
