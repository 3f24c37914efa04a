//! Topic drafts and their content payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::ChapterId;

use super::ComposerError;

/// What kind of learning activity a topic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TopicType {
    Video,
    Interactive,
    Exercise,
    Audio,
}

/// Discriminant of [`TopicContent`], used when switching the payload kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    #[default]
    ExternalLink,
    Video,
    Pdf,
    Text,
    InteractiveWidget,
    Iframe,
}

/// Content payload. Each variant carries only the fields of its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "contentType", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TopicContent {
    ExternalLink {
        #[serde(default)]
        url: String,
    },
    Video {
        #[serde(rename = "videoUrl", default)]
        video_url: String,
    },
    Pdf {
        #[serde(rename = "pdfUrl", default)]
        pdf_url: String,
    },
    Text {
        #[serde(rename = "textContent", default)]
        text_content: String,
    },
    InteractiveWidget {
        #[serde(rename = "widgetConfig", default)]
        widget_config: Value,
    },
    Iframe {
        #[serde(rename = "iframeHtml", default)]
        iframe_html: String,
    },
}

impl TopicContent {
    /// A blank payload of the given kind.
    pub fn empty(kind: ContentType) -> Self {
        match kind {
            ContentType::ExternalLink => TopicContent::ExternalLink { url: String::new() },
            ContentType::Video => TopicContent::Video {
                video_url: String::new(),
            },
            ContentType::Pdf => TopicContent::Pdf {
                pdf_url: String::new(),
            },
            ContentType::Text => TopicContent::Text {
                text_content: String::new(),
            },
            ContentType::InteractiveWidget => TopicContent::InteractiveWidget {
                widget_config: Value::Object(Default::default()),
            },
            ContentType::Iframe => TopicContent::Iframe {
                iframe_html: String::new(),
            },
        }
    }

    pub fn kind(&self) -> ContentType {
        match self {
            TopicContent::ExternalLink { .. } => ContentType::ExternalLink,
            TopicContent::Video { .. } => ContentType::Video,
            TopicContent::Pdf { .. } => ContentType::Pdf,
            TopicContent::Text { .. } => ContentType::Text,
            TopicContent::InteractiveWidget { .. } => ContentType::InteractiveWidget,
            TopicContent::Iframe { .. } => ContentType::Iframe,
        }
    }

    /// Switches to another kind. Fields of the previous kind are dropped.
    pub fn switch_to(&mut self, kind: ContentType) {
        if self.kind() != kind {
            *self = TopicContent::empty(kind);
        }
    }

    /// Stores an uploaded file's URL in the payload's file slot.
    ///
    /// Only video and PDF payloads have one.
    pub fn attach_url(&mut self, url: impl Into<String>) -> Result<(), ComposerError> {
        match self {
            TopicContent::Video { video_url } => *video_url = url.into(),
            TopicContent::Pdf { pdf_url } => *pdf_url = url.into(),
            other => return Err(ComposerError::UploadNotAccepted(other.kind())),
        }
        Ok(())
    }

    /// An iframe payload, when filled in, must contain an iframe tag.
    pub fn validate(&self) -> Result<(), ComposerError> {
        if let TopicContent::Iframe { iframe_html } = self {
            if !iframe_html.is_empty() && !iframe_html.contains("<iframe") {
                return Err(ComposerError::InvalidIframe);
            }
        }
        Ok(())
    }
}

impl Default for TopicContent {
    fn default() -> Self {
        TopicContent::empty(ContentType::default())
    }
}

/// A complete topic ready for the creation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub topic_type: TopicType,
    /// Free-form label such as "15 min".
    pub duration: String,
    pub order_index: u32,
    pub chapter_id: ChapterId,
    pub content: TopicContent,
}
