//! In-memory repository and scripted provider shared by the chat tests.

use std::sync::{Arc, Mutex};

use chatline_types::chat::{
    Conversation, DEFAULT_DISPLAY_NAME, MessageRole, MessageStatus, NewExchange,
    RecordedExchange, StoredMessage,
};
use chatline_types::error::RepositoryError;
use chatline_types::llm::{CompletionRequest, CompletionResponse, LlmError, StopReason, Usage};
use chrono::Utc;

use crate::chat::repository::ConversationRepository;
use crate::llm::provider::LlmProvider;

#[derive(Default)]
struct Tables {
    messages: Vec<StoredMessage>,
    conversations: Vec<Conversation>,
}

#[derive(Default)]
pub struct InMemoryRepository {
    tables: Mutex<Tables>,
    pub fail_writes: bool,
}

impl InMemoryRepository {
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn all_messages(&self) -> Vec<StoredMessage> {
        self.tables.lock().unwrap().messages.clone()
    }

    pub fn all_conversations(&self) -> Vec<Conversation> {
        self.tables.lock().unwrap().conversations.clone()
    }
}

impl ConversationRepository for InMemoryRepository {
    async fn get_messages(&self, conversation_id: &str) -> Result<Vec<StoredMessage>, RepositoryError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .messages
            .iter()
            .filter(|m| m.conversation_id == conversation_id)
            .cloned()
            .collect())
    }

    async fn record_exchange(
        &self,
        exchange: &NewExchange,
    ) -> Result<RecordedExchange, RepositoryError> {
        if self.fail_writes {
            return Err(RepositoryError::Query("disk full".to_string()));
        }
        let mut tables = self.tables.lock().unwrap();
        let now = Utc::now();
        let count = tables
            .messages
            .iter()
            .filter(|m| m.conversation_id == exchange.conversation_id)
            .count() as u32;

        let mut next_id = tables.messages.len() as i64 + 1;
        let mut make = |role, no, message_id: &str, text: &str, elapsed_ms| {
            let message = StoredMessage {
                id: next_id,
                role,
                conversation_id: exchange.conversation_id.clone(),
                message_no: no,
                message_id: message_id.to_string(),
                text: text.to_string(),
                elapsed_ms,
                status: MessageStatus::Success,
                created_at: now,
                updated_at: now,
            };
            next_id += 1;
            message
        };
        let user_message = make(
            MessageRole::User,
            count,
            &exchange.user_message_id,
            &exchange.user_text,
            0,
        );
        let assistant_message = make(
            MessageRole::Assistant,
            count + 1,
            &exchange.assistant_message_id,
            &exchange.assistant_text,
            exchange.assistant_elapsed_ms,
        );
        tables.messages.push(user_message.clone());
        tables.messages.push(assistant_message.clone());

        let existing = tables
            .conversations
            .iter_mut()
            .find(|c| c.conversation_id == exchange.conversation_id);
        let conversation_created = match existing {
            Some(conversation) => {
                conversation.message_count += 2;
                conversation.updated_at = now;
                false
            }
            None => {
                let id = tables.conversations.len() as i64 + 1;
                tables.conversations.push(Conversation {
                    id,
                    display_name: DEFAULT_DISPLAY_NAME.to_string(),
                    conversation_id: exchange.conversation_id.clone(),
                    user_id: exchange.user_id,
                    message_count: 2,
                    created_at: now,
                    updated_at: now,
                });
                true
            }
        };

        Ok(RecordedExchange {
            user_message,
            assistant_message,
            conversation_created,
        })
    }
}

/// What the scripted provider answers with.
#[derive(Clone)]
pub enum Script {
    Reply(String),
    ProviderError(String),
    Malformed,
}

/// Provider that returns a fixed answer and records every request.
pub struct ScriptedProvider {
    script: Script,
    pub requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl ScriptedProvider {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(Script::Reply(text.to_string()))
    }
}

impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.script {
            Script::Reply(text) => Ok(CompletionResponse {
                id: "resp-1".to_string(),
                content: text.clone(),
                model: request.model.clone(),
                stop_reason: StopReason::EndTurn,
                usage: Usage::default(),
            }),
            Script::ProviderError(message) => Err(LlmError::Provider {
                message: message.clone(),
            }),
            Script::Malformed => Err(LlmError::Deserialization(
                "response contained no choices".to_string(),
            )),
        }
    }
}
