//! # gemini-client - Google Gemini for Rust applications
//!
//! A small, pragmatic client facade for the Google Gemini API: text
//! generation, image-prompted generation, token counting, embeddings,
//! multi-turn chat sessions, and model listing behind one typed surface.
//!
//! ## Features
//! - Async, tokio compatible
//! - Layered configuration (`config/gemini.toml` + `GEMINI_*` environment)
//! - Pluggable HTTP transport with an ordered-preference selector
//! - Eager local validation; API and transport errors propagate unchanged
//!
//! ## Architecture
//!
//! 1. **`GeminiConfig`** resolves credentials once at startup.
//! 2. **`GeminiClient`** owns the credentials and transport; built once,
//!    shared behind an `Arc`, never mutated afterwards.
//! 3. **`Gemini`** is the facade application code calls; it implements the
//!    [`GenerativeService`] contract and hands out [`ChatSession`] values
//!    for stateful conversations.
//!
//! ## Example
//! ```no_run
//! use gemini_client::{Gemini, GeminiConfig, GenerativeService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GeminiConfig::load()?;
//!     let gemini = Gemini::from_config(config);
//!
//!     let text = gemini.generate_text("What is a borrow checker?").await?;
//!     println!("{text}");
//!
//!     let mut chat = gemini.start_chat(Vec::new())?;
//!     let reply = chat.send_message("Hello!").await?;
//!     println!("{reply}");
//!     Ok(())
//! }
//! ```

mod api;
pub mod chat;
pub mod client;
pub mod config;
pub mod facade;
pub mod http;
pub mod mime;
pub mod model;
pub mod options;
pub mod registry;

pub use chat::ChatSession;
pub use client::{GeminiClient, GeminiError, DEFAULT_BASE_URL};
pub use config::GeminiConfig;
pub use facade::{Gemini, GenerativeService};
pub use mime::MimeType;
pub use model::{ChatMessage, Model, Role};
pub use options::TransportOptions;
