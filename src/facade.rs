//! High-level Gemini operations over a shared client.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::api::{Blob, Content, Part};
use crate::chat::ChatSession;
use crate::client::{GeminiClient, GeminiError};
use crate::config::GeminiConfig;
use crate::mime::MimeType;
use crate::model::{ChatMessage, Model, ModelName, Role};

/// The operations a Gemini-backed generative service provides.
///
/// Implemented by [`Gemini`]; the trait is the contract application code
/// depends on, and what a test double stands in for.
#[async_trait]
pub trait GenerativeService: Send + Sync {
    /// Generate text from a prompt using the text model.
    async fn generate_text(&self, prompt: &str) -> Result<String, GeminiError>;

    /// Generate text from a base64-encoded image, with an optional prompt,
    /// using the vision model.
    ///
    /// `image_type` must be one of the supported image MIME types; see
    /// [`MimeType`].
    async fn generate_text_using_image(
        &self,
        image_type: &str,
        image: &str,
        prompt: &str,
    ) -> Result<String, GeminiError>;

    /// Generate text from an image file on disk, with an optional prompt.
    ///
    /// Reads and base64-encodes the file, then behaves like
    /// [`Self::generate_text_using_image`].
    async fn generate_text_using_image_file(
        &self,
        image_type: &str,
        image_path: &Path,
        prompt: &str,
    ) -> Result<String, GeminiError>;

    /// Count the tokens of a prompt against the text model.
    async fn count_tokens(&self, prompt: &str) -> Result<u32, GeminiError>;

    /// Embed a prompt into a vector. A title switches to the title-aware
    /// embedding call.
    async fn embed_text(&self, prompt: &str, title: Option<&str>)
        -> Result<Vec<f32>, GeminiError>;

    /// Start a chat session, optionally seeded with history.
    ///
    /// Every history entry must carry a non-empty message and a `user` or
    /// `model` role tag; the first invalid entry fails the whole call and
    /// no session is created.
    fn start_chat(&self, history: Vec<ChatMessage>) -> Result<ChatSession, GeminiError>;

    /// List the models exposed by the API.
    async fn list_models(&self) -> Result<Vec<Model>, GeminiError>;
}

/// Entry point for application code.
///
/// Holds a shared reference to the configured [`GeminiClient`]; cheap to
/// clone and pass to consumers. Construct it once with its resolved client
/// dependency rather than resolving through globals.
#[derive(Debug, Clone)]
pub struct Gemini {
    client: Arc<GeminiClient>,
}

impl Gemini {
    /// Wrap an already-constructed client.
    pub fn new(client: Arc<GeminiClient>) -> Self {
        Self { client }
    }

    /// Build a client from resolved configuration with the default
    /// transport and wrap it.
    pub fn from_config(config: GeminiConfig) -> Self {
        Self::new(Arc::new(GeminiClient::from_config(config, None)))
    }

    /// The underlying client.
    pub fn client(&self) -> Arc<GeminiClient> {
        Arc::clone(&self.client)
    }
}

#[async_trait]
impl GenerativeService for Gemini {
    async fn generate_text(&self, prompt: &str) -> Result<String, GeminiError> {
        let response = self
            .client
            .generate_content(
                ModelName::GeminiPro,
                vec![Content::text(prompt, Role::User)],
            )
            .await?;

        Ok(response.text())
    }

    async fn generate_text_using_image(
        &self,
        image_type: &str,
        image: &str,
        prompt: &str,
    ) -> Result<String, GeminiError> {
        let mime_type = MimeType::validate(image_type)?;

        let mut parts = vec![Part::InlineData {
            inline_data: Blob {
                mime_type: mime_type.as_str().to_string(),
                data: image.to_string(),
            },
        }];

        if !prompt.is_empty() {
            parts.push(Part::Text {
                text: prompt.to_string(),
            });
        }

        let contents = vec![Content {
            role: Role::User,
            parts,
        }];

        let response = self
            .client
            .generate_content(ModelName::GeminiProVision, contents)
            .await?;

        Ok(response.text())
    }

    async fn generate_text_using_image_file(
        &self,
        image_type: &str,
        image_path: &Path,
        prompt: &str,
    ) -> Result<String, GeminiError> {
        if !image_path.is_file() {
            return Err(GeminiError::InvalidArgument(format!(
                "The \"{}\" file does not exist or is not readable.",
                image_path.display()
            )));
        }

        let bytes = tokio::fs::read(image_path).await.map_err(|_| {
            GeminiError::InvalidArgument(format!(
                "Cannot read contents of the \"{}\" file",
                image_path.display()
            ))
        })?;

        let image = BASE64.encode(bytes);

        self.generate_text_using_image(image_type, &image, prompt)
            .await
    }

    async fn count_tokens(&self, prompt: &str) -> Result<u32, GeminiError> {
        let response = self
            .client
            .count_tokens(
                ModelName::GeminiPro,
                vec![Content::text(prompt, Role::User)],
            )
            .await?;

        Ok(response.total_tokens)
    }

    async fn embed_text(
        &self,
        prompt: &str,
        title: Option<&str>,
    ) -> Result<Vec<f32>, GeminiError> {
        let content = Content::text(prompt, Role::User);

        let response = match title {
            Some(title) => {
                self.client
                    .embed_content_with_title(ModelName::Embedding, title, content)
                    .await?
            }
            None => {
                self.client
                    .embed_content(ModelName::Embedding, content)
                    .await?
            }
        };

        Ok(response.embedding.values)
    }

    fn start_chat(&self, history: Vec<ChatMessage>) -> Result<ChatSession, GeminiError> {
        let mut contents = Vec::with_capacity(history.len());

        for entry in history {
            let role = Role::parse(&entry.role);

            match role {
                Some(role) if !entry.message.is_empty() => {
                    contents.push(Content::text(entry.message, role));
                }
                _ => {
                    return Err(GeminiError::InvalidArgument(
                        "Invalid message in the chat history".to_string(),
                    ))
                }
            }
        }

        Ok(ChatSession::new(self.client(), contents))
    }

    async fn list_models(&self) -> Result<Vec<Model>, GeminiError> {
        let response = self.client.list_models().await?;

        Ok(response.models)
    }
}
