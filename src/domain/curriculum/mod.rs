//! Curriculum domain module.
//!
//! Programs contain units, units contain chapters, chapters contain topics.
//! This module models the admin-side topic draft and the cascading composer
//! state used to place it.

mod catalog;
mod composer;
mod errors;
mod topic;

pub use catalog::{CatalogItem, NewChapter, NewUnit, DEFAULT_UNIT_COLOR, DEFAULT_UNIT_ICON};
pub use composer::{ComposerState, Generation, InlineCreate, TopicFields};
pub use errors::ComposerError;
pub use topic::{ContentType, TopicContent, TopicDraft, TopicType};
