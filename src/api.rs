//! Gemini REST wire types.
//!
//! Request and response bodies for the endpoints the client uses.
//! See: <https://ai.google.dev/api/rest>

use nonempty::NonEmpty;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::model::{Model, Role};

/// One conversation turn on the wire: a role tag plus an ordered parts list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Content {
    pub role: Role,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// A single-text-part turn.
    pub fn text(message: impl Into<String>, role: Role) -> Self {
        Self {
            role,
            parts: vec![Part::Text {
                text: message.into(),
            }],
        }
    }

    /// The text of the first part, or an empty string when the first part
    /// is not textual.
    pub fn first_text(&self) -> &str {
        match self.parts.first() {
            Some(Part::Text { text }) => text,
            _ => "",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub(crate) enum Part {
    Text { text: String },
    InlineData { inline_data: Blob },
}

/// Base64-encoded media bytes with their MIME type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Blob {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentResponse {
    pub candidates: NonEmpty<Candidate>,
    #[allow(dead_code)]
    pub model_version: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .content
            .parts
            .iter()
            .filter_map(|part| match part {
                Part::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Candidate {
    pub content: Content,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CountTokensRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CountTokensResponse {
    pub total_tokens: u32,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EmbedContentRequest {
    /// Fully qualified model name, e.g. `models/embedding-001`.
    pub model: String,
    pub content: Content,
    pub task_type: Option<TaskType>,
    pub title: Option<String>,
}

/// Embedding task types. Only the document-retrieval task is used here:
/// the API requires it whenever a title accompanies the content.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum TaskType {
    RetrievalDocument,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct EmbedContentResponse {
    pub embedding: ContentEmbedding,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ContentEmbedding {
    pub values: Vec<f32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListModelsResponse {
    pub models: Vec<Model>,
    #[allow(dead_code)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: ApiError,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiError {
    pub code: u32,
    pub message: String,
}
