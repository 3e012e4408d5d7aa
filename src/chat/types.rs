//! Types for conversation management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ConversationId, MessageId};

/// Title given to a conversation before its first user message arrives.
pub const PLACEHOLDER_TITLE: &str = "New Chat";

/// Maximum number of characters kept when a title is derived from the first
/// user message.
pub const TITLE_MAX_CHARS: usize = 50;

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The human on the other side of the textarea.
    User,
    /// The simulated assistant.
    Assistant,
}

/// A single immutable message inside a conversation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier, assigned at creation.
    pub id: MessageId,
    /// Text body. Light markdown-like emphasis markers are carried through
    /// untouched; they are display formatting, not structure.
    pub content: String,
    /// Author, fixed at creation.
    pub sender: Sender,
    /// Creation time.
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a message with a fresh identifier.
    #[must_use]
    pub fn new(sender: Sender, content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: MessageId::new(),
            content: content.into(),
            sender,
            timestamp,
        }
    }
}

/// A named, ordered thread of messages.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique identifier.
    pub id: ConversationId,
    /// Display title. Starts as [`PLACEHOLDER_TITLE`] and is replaced exactly
    /// once by the truncated first user message.
    pub title: String,
    /// Messages in insertion order. Append-only.
    pub messages: Vec<Message>,
    /// Timestamp of the most recent append. Display-only; it does not drive
    /// the order of the collection.
    pub last_updated: DateTime<Utc>,
}

impl Conversation {
    /// Create a conversation seeded with the assistant greeting.
    #[must_use]
    pub fn with_greeting(greeting: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: ConversationId::new(),
            title: PLACEHOLDER_TITLE.to_string(),
            messages: vec![Message::new(Sender::Assistant, greeting, now)],
            last_updated: now,
        }
    }

    /// Whether the conversation still carries the placeholder title.
    #[must_use]
    pub fn has_placeholder_title(&self) -> bool {
        self.title == PLACEHOLDER_TITLE
    }

    /// Append a message and bump `last_updated`.
    pub fn push(&mut self, message: Message) {
        self.last_updated = message.timestamp;
        self.messages.push(message);
    }
}

/// Derive a conversation title from the first user message: the first
/// `max_chars` characters, with an ellipsis appended when truncated.
#[must_use]
pub fn derive_title(text: &str, max_chars: usize) -> String {
    let mut title: String = text.chars().take(max_chars).collect();
    if text.chars().count() > max_chars {
        title.push_str("...");
    }
    title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_title_short_text_untouched() {
        assert_eq!(derive_title("Hello", TITLE_MAX_CHARS), "Hello");
    }

    #[test]
    fn test_derive_title_truncates_with_ellipsis() {
        let text = "a".repeat(60);
        let title = derive_title(&text, TITLE_MAX_CHARS);
        assert_eq!(title.chars().count(), 53);
        assert!(title.ends_with("..."));
    }

    #[test]
    fn test_derive_title_exact_limit_has_no_ellipsis() {
        let text = "b".repeat(TITLE_MAX_CHARS);
        assert_eq!(derive_title(&text, TITLE_MAX_CHARS), text);
    }

    #[test]
    fn test_sender_serializes_lowercase() {
        let json = serde_json::to_string(&Sender::Assistant).unwrap_or_default();
        assert_eq!(json, "\"assistant\"");
    }

    #[test]
    fn test_conversation_push_updates_last_updated() {
        let start = Utc::now();
        let mut conv = Conversation::with_greeting("hi", start);
        let later = start + chrono::Duration::milliseconds(1500);
        conv.push(Message::new(Sender::User, "question", later));

        assert_eq!(conv.messages.len(), 2);
        assert_eq!(conv.last_updated, later);
    }
}
