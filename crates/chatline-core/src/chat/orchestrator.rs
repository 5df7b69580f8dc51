//! Chat orchestrator: conversation history + model call -> reply.
//!
//! Loads the prior messages of a conversation (or mints a new identifier),
//! renders them into a transcript, asks the LLM for the next assistant turn,
//! and returns the reply with the conversation identifier. Every failure is
//! returned as a typed [`ChatError`]; nothing panics past this boundary.

use std::sync::Arc;
use std::time::Instant;

use tracing::{Instrument, debug, info_span, warn};

use chatline_types::chat::ChatReply;
use chatline_types::config::ChatSettings;
use chatline_types::error::ChatError;
use chatline_types::llm::{CompletionRequest, Message, MessageRole};

use crate::chat::repository::ConversationRepository;
use crate::chat::transcript::{NEW_CONVERSATION_TRANSCRIPT, render_transcript, user_turn};
use crate::id::{generate_id, non_blank};
use crate::llm::box_provider::BoxLlmProvider;

/// A reply plus how long the model took to produce it.
#[derive(Debug, Clone)]
pub struct GeneratedReply {
    pub reply: ChatReply,
    pub elapsed_ms: u64,
}

/// Builds grounded model requests and interprets the responses.
pub struct ChatOrchestrator<R: ConversationRepository> {
    repo: Arc<R>,
    provider: BoxLlmProvider,
    settings: ChatSettings,
}

impl<R: ConversationRepository> ChatOrchestrator<R> {
    pub fn new(repo: Arc<R>, provider: BoxLlmProvider, settings: ChatSettings) -> Self {
        Self {
            repo,
            provider,
            settings,
        }
    }

    /// Build the model request: fixed system instruction plus one user turn.
    pub fn build_request(&self, transcript: &str, message: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.settings.model.clone(),
            messages: vec![Message {
                role: MessageRole::User,
                content: user_turn(transcript, message),
            }],
            system: Some(self.settings.system_prompt.clone()),
            max_tokens: self.settings.max_tokens,
            temperature: Some(self.settings.temperature),
        }
    }

    /// Produce the assistant reply for `message`.
    ///
    /// A blank `conversation_id` starts a new conversation with a freshly
    /// minted identifier.
    pub async fn reply(
        &self,
        message: &str,
        conversation_id: Option<&str>,
    ) -> Result<GeneratedReply, ChatError> {
        if message.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let (conversation_id, transcript) = match non_blank(conversation_id) {
            Some(id) => {
                let history = self.repo.get_messages(id).await?;
                debug!(conversation_id = %id, prior_messages = history.len(), "Loaded history");
                (id.to_string(), render_transcript(&history))
            }
            None => (generate_id(), NEW_CONVERSATION_TRANSCRIPT.to_string()),
        };

        let request = self.build_request(&transcript, message);

        let span = info_span!(
            "gen_ai.complete",
            gen_ai.system = self.provider.name(),
            gen_ai.request.model = %request.model,
            gen_ai.request.max_tokens = request.max_tokens,
            gen_ai.request.temperature = ?request.temperature,
            conversation_id = %conversation_id,
        );

        let start = Instant::now();
        let response = self
            .provider
            .complete(&request)
            .instrument(span)
            .await
            .map_err(|e| {
                warn!(conversation_id = %conversation_id, error = %e, "LLM call failed");
                e
            })?;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        if response.content.trim().is_empty() {
            warn!(conversation_id = %conversation_id, "LLM returned an empty completion");
            return Err(ChatError::EmptyResponse);
        }

        debug!(
            conversation_id = %conversation_id,
            elapsed_ms,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            stop_reason = %response.stop_reason,
            "LLM reply received"
        );

        Ok(GeneratedReply {
            reply: ChatReply {
                message: response.content,
                conversation_id,
            },
            elapsed_ms,
        })
    }
}
