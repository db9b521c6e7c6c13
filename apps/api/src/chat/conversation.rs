//! Message bookkeeping for chat sessions. No I/O here.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::llm_client::ChatTurn;
use crate::models::chat::{ChatMessage, MessageRole};

pub const WELCOME_MESSAGE: &str = "Hello! I'm your AI career assistant. How can I help you today?";
pub const FALLBACK_MESSAGE: &str =
    "I'm having trouble connecting to my knowledge base right now. Please try again in a moment.";

/// A message supplied by the client when creating a session. Missing ids and
/// timestamps are filled in on the server.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
    pub id: Option<String>,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: Option<DateTime<Utc>>,
}

pub fn new_message(role: MessageRole, content: impl Into<String>) -> ChatMessage {
    ChatMessage {
        id: Uuid::new_v4().simple().to_string(),
        role,
        content: content.into(),
        timestamp: Utc::now(),
    }
}

/// Assistant greeting. A blank override falls back to the default text.
pub fn welcome(content: Option<&str>) -> ChatMessage {
    let text = content
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(WELCOME_MESSAGE);
    new_message(MessageRole::Assistant, text)
}

pub fn fallback() -> ChatMessage {
    new_message(MessageRole::Assistant, FALLBACK_MESSAGE)
}

/// Completes client-supplied messages. A session never starts empty.
pub fn normalize_incoming(messages: Vec<IncomingMessage>) -> Vec<ChatMessage> {
    if messages.is_empty() {
        return vec![welcome(None)];
    }
    messages
        .into_iter()
        .map(|m| ChatMessage {
            id: m
                .id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| Uuid::new_v4().simple().to_string()),
            role: m.role,
            content: m.content,
            timestamp: m.timestamp.unwrap_or_else(Utc::now),
        })
        .collect()
}

/// Full prior history plus the new user message, oldest first.
pub fn history_turns(history: &[ChatMessage], latest: &ChatMessage) -> Vec<ChatTurn> {
    history
        .iter()
        .chain(std::iter::once(latest))
        .map(|m| match m.role {
            MessageRole::User => ChatTurn::user(m.content.clone()),
            MessageRole::Assistant => ChatTurn::assistant(m.content.clone()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::TurnRole;

    #[test]
    fn test_empty_session_gets_welcome() {
        let messages = normalize_incoming(vec![]);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, MessageRole::Assistant);
        assert_eq!(messages[0].content, WELCOME_MESSAGE);
    }

    #[test]
    fn test_missing_ids_and_timestamps_filled() {
        let ts = Utc::now();
        let messages = normalize_incoming(vec![
            IncomingMessage {
                id: None,
                role: MessageRole::User,
                content: "hi".into(),
                timestamp: None,
            },
            IncomingMessage {
                id: Some("keep-me".into()),
                role: MessageRole::Assistant,
                content: "hello".into(),
                timestamp: Some(ts),
            },
        ]);
        assert!(!messages[0].id.is_empty());
        assert_eq!(messages[1].id, "keep-me");
        assert_eq!(messages[1].timestamp, ts);
    }

    #[test]
    fn test_welcome_override() {
        assert_eq!(welcome(Some("Fresh start!")).content, "Fresh start!");
        assert_eq!(welcome(Some("  ")).content, WELCOME_MESSAGE);
    }

    #[test]
    fn test_history_ends_with_latest_user_turn() {
        let history = vec![welcome(None)];
        let latest = new_message(MessageRole::User, "What does a DevOps engineer do?");
        let turns = history_turns(&history, &latest);
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role, TurnRole::Assistant);
        assert_eq!(turns[1].role, TurnRole::User);
        assert_eq!(turns[1].content, "What does a DevOps engineer do?");
    }

    #[test]
    fn test_message_wire_format() {
        let json = serde_json::to_value(new_message(MessageRole::User, "hi")).unwrap();
        assert_eq!(json["role"], "user");
        assert!(json["timestamp"].is_string());
    }
}
