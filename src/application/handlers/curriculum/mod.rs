//! Curriculum handlers.
//!
//! The admin topic composer controller.

mod topic_composer;

pub use topic_composer::{TopicComposer, TopicCreatedCallback};
