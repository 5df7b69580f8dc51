//! Chat service: the request-level pipeline behind the HTTP endpoints.
//!
//! ChatService asks the orchestrator for a reply, then records the
//! user/assistant pair (and the conversation record on the first exchange)
//! in a single repository transaction.

use std::sync::Arc;

use tracing::{info, warn};

use chatline_types::chat::{ChatReply, ConversationHistory, NewExchange};
use chatline_types::config::ChatSettings;
use chatline_types::error::ChatError;

use crate::chat::orchestrator::ChatOrchestrator;
use crate::chat::repository::ConversationRepository;
use crate::id::{generate_id, non_blank};
use crate::llm::box_provider::BoxLlmProvider;

/// Input of [`ChatService::send_message`].
#[derive(Debug, Clone)]
pub struct SendMessage {
    pub text: String,
    pub user_id: i64,
    /// Client-generated id for the user message; minted when blank.
    pub message_id: Option<String>,
    /// 1-based running count of user messages in the client session.
    pub message_count: u32,
    pub conversation_id: Option<String>,
}

/// Map the client's 1-based running counter to a zero-based position.
///
/// `1` means "first message of a new conversation" and becomes `0`; any other
/// value is passed through unchanged.
pub fn normalize_message_count(message_count: u32) -> u32 {
    if message_count == 1 { 0 } else { message_count }
}

/// Orchestrates a chat exchange and its persistence.
///
/// Generic over `ConversationRepository` so chatline-core never depends on
/// chatline-infra.
pub struct ChatService<R: ConversationRepository> {
    repo: Arc<R>,
    orchestrator: ChatOrchestrator<R>,
}

impl<R: ConversationRepository> ChatService<R> {
    pub fn new(repo: R, provider: BoxLlmProvider, settings: ChatSettings) -> Self {
        let repo = Arc::new(repo);
        let orchestrator = ChatOrchestrator::new(repo.clone(), provider, settings);
        Self { repo, orchestrator }
    }

    /// Access the repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Generate a reply and persist the exchange.
    ///
    /// Nothing is written when the model call fails or returns nothing, and a
    /// failed write leaves no partial rows behind.
    pub async fn send_message(&self, request: SendMessage) -> Result<ChatReply, ChatError> {
        let claimed_position = normalize_message_count(request.message_count);

        let generated = self
            .orchestrator
            .reply(&request.text, request.conversation_id.as_deref())
            .await?;

        let user_message_id = non_blank(request.message_id.as_deref())
            .map(str::to_string)
            .unwrap_or_else(generate_id);

        let exchange = NewExchange {
            conversation_id: generated.reply.conversation_id.clone(),
            user_id: request.user_id,
            user_message_id,
            user_text: request.text,
            assistant_message_id: generate_id(),
            assistant_text: generated.reply.message.clone(),
            assistant_elapsed_ms: generated.elapsed_ms,
        };

        let recorded = self.repo.record_exchange(&exchange).await?;

        if recorded.user_message.message_no != claimed_position {
            warn!(
                conversation_id = %exchange.conversation_id,
                client_message_count = request.message_count,
                stored_message_no = recorded.user_message.message_no,
                "Client message count disagrees with stored history; using stored position"
            );
        }

        info!(
            conversation_id = %exchange.conversation_id,
            user_message_no = recorded.user_message.message_no,
            assistant_message_no = recorded.assistant_message.message_no,
            conversation_created = recorded.conversation_created,
            elapsed_ms = generated.elapsed_ms,
            "Exchange recorded"
        );

        Ok(generated.reply)
    }

    /// Ordered history of a conversation. Unknown ids give an empty history.
    pub async fn history(&self, conversation_id: &str) -> Result<ConversationHistory, ChatError> {
        let messages = self.repo.get_messages(conversation_id).await?;
        Ok(ConversationHistory::from_messages(conversation_id, &messages))
    }
}
