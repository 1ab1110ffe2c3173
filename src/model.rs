//! Public domain types: chat roles, history records, model descriptors.

use serde::{Deserialize, Serialize};

/// Author of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }

    /// Parse a role tag from its wire form. Returns `None` for anything
    /// other than `"user"` or `"model"`.
    pub fn parse(tag: &str) -> Option<Role> {
        match tag {
            "user" => Some(Role::User),
            "model" => Some(Role::Model),
            _ => None,
        }
    }
}

/// A single chat turn in its external wire shape.
///
/// The `role` tag is kept as a plain string here and validated against
/// [`Role`] when a chat session is started; `history()` projections use the
/// same shape on the way out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub message: String,
    pub role: String,
}

impl ChatMessage {
    pub fn new(message: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            role: role.into(),
        }
    }
}

/// Descriptor of a model exposed by the Gemini API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub input_token_limit: u32,
    #[serde(default)]
    pub output_token_limit: u32,
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub top_k: Option<u32>,
}

/// Backend models the facade routes to. Selection is an internal policy:
/// text operations use the text model, image operations the vision model,
/// embeddings the embedding model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ModelName {
    GeminiPro,
    GeminiProVision,
    Embedding,
}

impl ModelName {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            ModelName::GeminiPro => "gemini-pro",
            ModelName::GeminiProVision => "gemini-pro-vision",
            ModelName::Embedding => "embedding-001",
        }
    }
}
