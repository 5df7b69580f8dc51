//! Conversation and message types for Chatline.
//!
//! A conversation groups an append-only sequence of stored messages under an
//! opaque identifier. Each exchange adds one user message and one assistant
//! message with consecutive sequence numbers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

// Re-export MessageRole from llm module (it's used in both chat and llm contexts).
pub use crate::llm::MessageRole;

/// Display name given to every conversation at creation.
pub const DEFAULT_DISPLAY_NAME: &str = "NEW CHAT";

/// Outcome recorded on a stored message.
///
/// Maps to the CHECK constraint in the SQLite schema:
/// `CHECK (status IN ('success', 'failure'))`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    #[default]
    Success,
    Failure,
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageStatus::Success => write!(f, "success"),
            MessageStatus::Failure => write!(f, "failure"),
        }
    }
}

impl FromStr for MessageStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "success" => Ok(MessageStatus::Success),
            "failure" => Ok(MessageStatus::Failure),
            other => Err(format!("invalid message status: '{other}'")),
        }
    }
}

/// A single persisted message.
///
/// `id` is assigned by the store and increases monotonically; history is
/// always ordered by it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredMessage {
    pub id: i64,
    pub role: MessageRole,
    pub conversation_id: String,
    /// Zero-based position within the conversation.
    pub message_no: u32,
    pub message_id: String,
    pub text: String,
    /// Model round-trip time for assistant messages, 0 for user messages.
    pub elapsed_ms: u64,
    pub status: MessageStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Conversation metadata, created on the first exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: i64,
    pub display_name: String,
    pub conversation_id: String,
    pub user_id: i64,
    pub message_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One user/assistant pair to be written atomically.
///
/// Sequence numbers are not part of the input: the store assigns them from
/// the messages it already holds for `conversation_id`.
#[derive(Debug, Clone)]
pub struct NewExchange {
    pub conversation_id: String,
    pub user_id: i64,
    pub user_message_id: String,
    pub user_text: String,
    pub assistant_message_id: String,
    pub assistant_text: String,
    pub assistant_elapsed_ms: u64,
}

/// What the store wrote for a [`NewExchange`].
#[derive(Debug, Clone)]
pub struct RecordedExchange {
    pub user_message: StoredMessage,
    pub assistant_message: StoredMessage,
    /// True when this exchange created the conversation record.
    pub conversation_created: bool,
}

/// The orchestrator's answer to a user message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub message: String,
    pub conversation_id: String,
}

/// A `{role, message}` pair as exposed by the history endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: MessageRole,
    pub message: String,
}

impl From<&StoredMessage> for HistoryEntry {
    fn from(message: &StoredMessage) -> Self {
        Self {
            role: message.role,
            message: message.text.clone(),
        }
    }
}

/// Full ordered history of a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationHistory {
    pub conversation_id: String,
    pub message_count: usize,
    pub messages: Vec<HistoryEntry>,
}

impl ConversationHistory {
    /// Build a history from stored messages, keeping their order.
    pub fn from_messages(conversation_id: impl Into<String>, messages: &[StoredMessage]) -> Self {
        let messages: Vec<HistoryEntry> = messages.iter().map(HistoryEntry::from).collect();
        Self {
            conversation_id: conversation_id.into(),
            message_count: messages.len(),
            messages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(id: i64, role: MessageRole, text: &str) -> StoredMessage {
        StoredMessage {
            id,
            role,
            conversation_id: "abcd1234-ef56".to_string(),
            message_no: (id - 1) as u32,
            message_id: format!("m{id}"),
            text: text.to_string(),
            elapsed_ms: 0,
            status: MessageStatus::Success,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_message_status_parse() {
        assert_eq!("Success".parse::<MessageStatus>().unwrap(), MessageStatus::Success);
        assert_eq!("failure".parse::<MessageStatus>().unwrap(), MessageStatus::Failure);
        assert!("pending".parse::<MessageStatus>().is_err());
    }

    #[test]
    fn test_message_status_default() {
        assert_eq!(MessageStatus::default(), MessageStatus::Success);
    }

    #[test]
    fn test_history_preserves_order_and_count() {
        let messages = vec![
            stored(1, MessageRole::User, "hi"),
            stored(2, MessageRole::Assistant, "hello!"),
            stored(3, MessageRole::User, "how are you?"),
        ];
        let history = ConversationHistory::from_messages("abcd1234-ef56", &messages);
        assert_eq!(history.message_count, 3);
        assert_eq!(history.messages[0].message, "hi");
        assert_eq!(history.messages[1].role, MessageRole::Assistant);
        assert_eq!(history.messages[2].message, "how are you?");
    }

    #[test]
    fn test_empty_history_serializes_with_zero_count() {
        let history = ConversationHistory::from_messages("missing", &[]);
        let json = serde_json::to_value(&history).unwrap();
        assert_eq!(json["conversation_id"], "missing");
        assert_eq!(json["message_count"], 0);
        assert_eq!(json["messages"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_history_entry_wire_shape() {
        let entry = HistoryEntry::from(&stored(1, MessageRole::User, "hi"));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "message": "hi"}));
    }
}
