//! Configuration loading and credential resolution.

use config::{Config, Environment, File, Value, ValueKind};
use serde::Deserialize;

use crate::client::GeminiError;

/// Resolved Gemini credentials.
///
/// Produced once at application startup by [`GeminiConfig::resolve`] and
/// never re-resolved; the client built from it is immutable.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiConfig {
    /// API key for the Gemini API. Required.
    pub api_key: String,
    /// Optional override of the API endpoint.
    pub base_url: Option<String>,
}

impl GeminiConfig {
    /// Load and resolve configuration from the default sources.
    pub fn load() -> Result<Self, GeminiError> {
        Self::resolve(&Self::source()?)
    }

    /// The default layered configuration source: the `config/gemini.toml`
    /// file (optional) overlaid with `GEMINI_*` environment variables.
    pub fn source() -> Result<Config, GeminiError> {
        Config::builder()
            .add_source(File::with_name("config/gemini").required(false))
            .add_source(Environment::with_prefix("GEMINI"))
            .build()
            .map_err(|e| GeminiError::Config(e.to_string()))
    }

    /// Resolve credentials from a materialized configuration mapping.
    ///
    /// Fails with [`GeminiError::MissingApiKey`] when `api_key` is absent,
    /// empty, or not a string, and with [`GeminiError::InvalidArgument`]
    /// when `base_url` is present but not a string.
    pub fn resolve(source: &Config) -> Result<Self, GeminiError> {
        let api_key = match source.get::<Value>("api_key") {
            Ok(value) => match value.kind {
                ValueKind::String(key) if !key.is_empty() => key,
                _ => return Err(GeminiError::MissingApiKey),
            },
            Err(_) => return Err(GeminiError::MissingApiKey),
        };

        let base_url = match source.get::<Value>("base_url") {
            Ok(value) => match value.kind {
                ValueKind::String(url) => Some(url),
                ValueKind::Nil => None,
                _ => {
                    return Err(GeminiError::InvalidArgument(
                        "The Gemini API Base URL is invalid.".to_string(),
                    ))
                }
            },
            Err(_) => None,
        };

        Ok(Self { api_key, base_url })
    }
}
