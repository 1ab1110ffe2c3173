//! Low-level Gemini API client and the crate error type.

use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::api::{
    Content, CountTokensRequest, CountTokensResponse, EmbedContentRequest, EmbedContentResponse,
    ErrorResponse, GenerateContentRequest, GenerateContentResponse, ListModelsResponse, TaskType,
};
use crate::config::GeminiConfig;
use crate::http::{RequestBuilderExt, ResponseExt};
use crate::mime::MimeType;
use crate::model::ModelName;

/// Default API endpoint, overridable through [`GeminiClient::with_base_url`].
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Gemini error ({code}): {message}")]
    Api { code: u32, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(
        "The Gemini API key is missing. Set the [api_key] entry in the [config/gemini.toml] configuration file or the GEMINI_API_KEY environment variable."
    )]
    MissingApiKey,

    #[error("{0}")]
    InvalidArgument(String),

    #[error(
        "The Gemini API does not support the image type [{0}]. Supported image types are [{types}]",
        types = MimeType::supported_types()
    )]
    InvalidMimeType(String),
}

/// Gemini API client over HTTP.
///
/// Owns the credentials and the transport; immutable after construction.
/// Facade calls share one instance behind an `Arc`.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    http: reqwest::Client,
}

impl GeminiClient {
    /// Create a client for the default endpoint. When `transport` is `None`
    /// the default `reqwest` client is used.
    pub fn new(api_key: impl Into<String>, transport: Option<reqwest::Client>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http: transport.unwrap_or_default(),
        }
    }

    /// Build a client from resolved configuration and a selected transport.
    ///
    /// A non-empty `base_url` in the configuration overrides the default
    /// endpoint. Validation has already happened in
    /// [`GeminiConfig::resolve`]; this cannot fail.
    pub fn from_config(config: GeminiConfig, transport: Option<reqwest::Client>) -> Self {
        let client = Self::new(config.api_key, transport);
        match config.base_url {
            Some(url) if !url.is_empty() => client.with_base_url(url),
            _ => client,
        }
    }

    /// Returns a new client targeting `base_url` instead of the default
    /// endpoint. Consumes `self`; the original value is unchanged elsewhere.
    pub fn with_base_url(self, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..self
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn generate_content(
        &self,
        model: ModelName,
        contents: Vec<Content>,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url,
            model.as_str(),
            self.api_key
        );

        self.post(&url, &GenerateContentRequest { contents }).await
    }

    pub(crate) async fn count_tokens(
        &self,
        model: ModelName,
        contents: Vec<Content>,
    ) -> Result<CountTokensResponse, GeminiError> {
        let url = format!(
            "{}/models/{}:countTokens?key={}",
            self.base_url,
            model.as_str(),
            self.api_key
        );

        self.post(&url, &CountTokensRequest { contents }).await
    }

    pub(crate) async fn embed_content(
        &self,
        model: ModelName,
        content: Content,
    ) -> Result<EmbedContentResponse, GeminiError> {
        let request = EmbedContentRequest {
            model: format!("models/{}", model.as_str()),
            content,
            task_type: None,
            title: None,
        };

        self.post(&self.embed_url(model), &request).await
    }

    /// Titled variant of [`Self::embed_content`]. The API only accepts a
    /// title together with the document-retrieval task type.
    pub(crate) async fn embed_content_with_title(
        &self,
        model: ModelName,
        title: &str,
        content: Content,
    ) -> Result<EmbedContentResponse, GeminiError> {
        let request = EmbedContentRequest {
            model: format!("models/{}", model.as_str()),
            content,
            task_type: Some(TaskType::RetrievalDocument),
            title: Some(title.to_string()),
        };

        self.post(&self.embed_url(model), &request).await
    }

    pub(crate) async fn list_models(&self) -> Result<ListModelsResponse, GeminiError> {
        let url = format!("{}/models?key={}", self.base_url, self.api_key);

        let response = self.http.get(&url).send().await?;
        Self::decode(response).await
    }

    fn embed_url(&self, model: ModelName) -> String {
        format!(
            "{}/models/{}:embedContent?key={}",
            self.base_url,
            model.as_str(),
            self.api_key
        )
    }

    async fn post<B, T>(&self, url: &str, body: &B) -> Result<T, GeminiError>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json_logged(body)
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, GeminiError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text_logged().await.unwrap_or_default();
            return Err(Self::handle_error_response(status, &body));
        }

        response.json_logged().await
    }

    /// Decode a Gemini error body, falling back to the raw status and text.
    fn handle_error_response(status: reqwest::StatusCode, body: &str) -> GeminiError {
        if let Ok(error_resp) = serde_json::from_str::<ErrorResponse>(body) {
            GeminiError::Api {
                code: error_resp.error.code,
                message: error_resp.error.message,
            }
        } else {
            GeminiError::Api {
                code: u32::from(status.as_u16()),
                message: body.to_string(),
            }
        }
    }
}
