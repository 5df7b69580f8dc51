//! Per-session client state: the current conversation and message counter.

use chatline_core::id::generate_id;
use chatline_types::chat::ChatReply;

use super::api::ChatParams;

#[derive(Debug)]
pub struct ChatSession {
    user_id: i64,
    conversation_id: String,
    message_count: u32,
}

impl ChatSession {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            conversation_id: String::new(),
            message_count: 0,
        }
    }

    /// Count `text` as the next user message and build its request.
    pub fn next_message(&mut self, text: &str) -> ChatParams {
        self.message_count += 1;
        ChatParams {
            message: text.to_string(),
            user_id: self.user_id,
            message_id: generate_id(),
            message_count: self.message_count,
            conversation_id: self.conversation_id.clone(),
        }
    }

    /// Adopt the conversation id the server answered with.
    pub fn accept(&mut self, reply: &ChatReply) {
        self.conversation_id = reply.conversation_id.clone();
    }

    /// Forget the conversation; the next message starts a new one.
    pub fn reset(&mut self) {
        self.conversation_id.clear();
        self.message_count = 0;
    }

    pub fn conversation_id(&self) -> Option<&str> {
        (!self.conversation_id.is_empty()).then_some(self.conversation_id.as_str())
    }

    pub fn message_count(&self) -> u32 {
        self.message_count
    }
}
