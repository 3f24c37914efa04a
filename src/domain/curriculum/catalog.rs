//! Catalog entries the composer selects from, and inline-create bodies.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProgramId, UnitId};

/// Unit icon assigned to units created from the composer.
pub const DEFAULT_UNIT_ICON: &str = "📚";

/// Unit gradient assigned to units created from the composer.
pub const DEFAULT_UNIT_COLOR: &str = "from-blue-400 to-blue-600";

/// A selectable `{id, name}` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem<Id> {
    pub id: Id,
    pub name: String,
}

/// Body of the inline "create unit" call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUnit {
    pub id: UnitId,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub is_locked: bool,
    pub order_index: u32,
    pub class_id: ProgramId,
}

impl NewUnit {
    pub fn new(name: impl Into<String>, order_index: u32, class_id: ProgramId) -> Self {
        Self {
            id: UnitId::generate(),
            name: name.into(),
            icon: DEFAULT_UNIT_ICON.to_string(),
            color: DEFAULT_UNIT_COLOR.to_string(),
            is_locked: false,
            order_index,
            class_id,
        }
    }
}

/// Body of the inline "create chapter" call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChapter {
    pub name: String,
    pub order_index: u32,
    pub subject_id: UnitId,
}
