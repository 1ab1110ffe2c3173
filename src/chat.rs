//! Stateful multi-turn chat over the text model.

use std::sync::Arc;

use crate::api::Content;
use crate::client::{GeminiClient, GeminiError};
use crate::model::{ChatMessage, ModelName, Role};

/// An ongoing conversation with the text model.
///
/// Created by [`crate::Gemini::start_chat`], empty or seeded with validated
/// history. One session belongs to one logical conversation at a time; it
/// is not meant to be shared across tasks.
#[derive(Debug, Clone)]
pub struct ChatSession {
    client: Arc<GeminiClient>,
    history: Vec<Content>,
}

impl ChatSession {
    pub(crate) fn new(client: Arc<GeminiClient>, history: Vec<Content>) -> Self {
        Self { client, history }
    }

    /// Send `text` as the next user turn and return the model's reply.
    ///
    /// The user turn and the reply are recorded only after the model call
    /// succeeds; a transport or API error leaves the history unchanged.
    pub async fn send_message(&mut self, text: &str) -> Result<String, GeminiError> {
        let user_turn = Content::text(text, Role::User);

        let mut contents = self.history.clone();
        contents.push(user_turn.clone());

        let response = self
            .client
            .generate_content(ModelName::GeminiPro, contents)
            .await?;

        let reply = response.text();
        let model_turn = response.candidates.first().content.clone();

        self.history.push(user_turn);
        self.history.push(model_turn);

        Ok(reply)
    }

    /// Project the stored turns into `{message, role}` records.
    ///
    /// Each record carries the text of the turn's first part, or an empty
    /// string when the first part is not textual.
    pub fn history(&self) -> Vec<ChatMessage> {
        self.history
            .iter()
            .map(|content| ChatMessage {
                message: content.first_text().to_string(),
                role: content.role.as_str().to_string(),
            })
            .collect()
    }
}
