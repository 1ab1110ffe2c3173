use std::sync::Arc;

use gemini_client::{ChatMessage, Gemini, GeminiClient, GeminiError, GenerativeService};

fn gemini() -> Gemini {
    Gemini::new(Arc::new(GeminiClient::new("test-key", None)))
}

#[test]
fn test_start_chat_with_empty_history() {
    let session = gemini().start_chat(Vec::new()).unwrap();
    assert!(session.history().is_empty());
}

#[test]
fn test_start_chat_with_valid_history() {
    let history = vec![
        ChatMessage::new("hi", "user"),
        ChatMessage::new("Hello, how can I help?", "model"),
    ];

    let session = gemini().start_chat(history.clone()).unwrap();
    assert_eq!(session.history(), history);
}

#[test]
fn test_start_chat_rejects_empty_message() {
    let err = gemini()
        .start_chat(vec![ChatMessage::new("", "user")])
        .unwrap_err();

    assert!(matches!(err, GeminiError::InvalidArgument(_)));
    assert_eq!(err.to_string(), "Invalid message in the chat history");
}

#[test]
fn test_start_chat_rejects_unknown_role() {
    let err = gemini()
        .start_chat(vec![ChatMessage::new("hi", "alien")])
        .unwrap_err();

    assert!(matches!(err, GeminiError::InvalidArgument(_)));
    assert_eq!(err.to_string(), "Invalid message in the chat history");
}

#[test]
fn test_start_chat_aborts_on_first_invalid_entry() {
    // A valid leading entry does not rescue the call.
    let err = gemini()
        .start_chat(vec![
            ChatMessage::new("hi", "user"),
            ChatMessage::new("hello", "assistant"),
        ])
        .unwrap_err();

    assert!(matches!(err, GeminiError::InvalidArgument(_)));
}
