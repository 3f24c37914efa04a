//! Curriculum catalog port for the admin topic composer.
//!
//! Covers the three list endpoints the composer cascades through and the
//! create endpoints for units, chapters and topics.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::curriculum::{CatalogItem, NewChapter, NewUnit, TopicDraft};
use crate::domain::foundation::{ChapterId, ProgramId, TopicId, UnitId};

use super::ApiError;

/// Topic as echoed back by the create endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedTopic {
    pub id: TopicId,
    pub name: String,
}

#[async_trait]
pub trait CurriculumCatalog: Send + Sync {
    /// `GET /api/admin/programs`
    async fn list_programs(&self) -> Result<Vec<CatalogItem<ProgramId>>, ApiError>;

    /// `GET /api/admin/units?classId=`
    async fn list_units(&self, program: ProgramId) -> Result<Vec<CatalogItem<UnitId>>, ApiError>;

    /// `GET /api/admin/chapters?subjectId=`
    async fn list_chapters(&self, unit: &UnitId) -> Result<Vec<CatalogItem<ChapterId>>, ApiError>;

    /// `POST /api/admin/units`
    async fn create_unit(&self, unit: NewUnit) -> Result<CatalogItem<UnitId>, ApiError>;

    /// `POST /api/admin/chapters`
    async fn create_chapter(&self, chapter: NewChapter)
        -> Result<CatalogItem<ChapterId>, ApiError>;

    /// `POST /api/admin/topics`
    async fn create_topic(&self, draft: TopicDraft) -> Result<CreatedTopic, ApiError>;
}
