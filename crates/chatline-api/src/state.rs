//! Application state wiring the chat service to its infrastructure.
//!
//! `ChatService` is generic over the repository trait; AppState pins it to
//! the SQLite implementation.

use std::sync::Arc;

use anyhow::Context;

use chatline_core::chat::service::ChatService;
use chatline_core::llm::box_provider::BoxLlmProvider;
use chatline_infra::llm::create_provider;
use chatline_infra::sqlite::conversation::SqliteConversationRepository;
use chatline_infra::sqlite::pool::DatabasePool;
use chatline_types::config::{AppConfig, ChatSettings, ClientConfig, ServerConfig};
use chatline_types::llm::LlmError;

pub type ConcreteChatService = ChatService<SqliteConversationRepository>;

/// Shared state handed to every HTTP handler.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub server: ServerConfig,
    /// Settings handed to the browser client.
    pub client: ClientConfig,
}

impl AppState {
    /// Connect to the database and the model provider, then wire the service.
    pub async fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let provider = create_provider(&config.llm).map_err(|e| match e {
            LlmError::AuthenticationFailed => anyhow::anyhow!(
                "OPENAI_API_KEY is not set. Export it or set llm.api_key in chatline.toml"
            ),
            other => anyhow::anyhow!("failed to configure LLM provider: {other}"),
        })?;

        let pool = DatabasePool::new(&config.database.url, config.database.max_read_connections)
            .await
            .with_context(|| "failed to open the conversation database")?;

        Ok(Self::from_parts(
            pool,
            provider,
            config.llm.chat_settings(),
            config.server.clone(),
        )
        .with_client(config.client.clone()))
    }

    /// Assemble state from already-built parts.
    pub fn from_parts(
        pool: DatabasePool,
        provider: BoxLlmProvider,
        settings: ChatSettings,
        server: ServerConfig,
    ) -> Self {
        let repo = SqliteConversationRepository::new(pool);
        Self {
            chat_service: Arc::new(ChatService::new(repo, provider, settings)),
            server,
            client: ClientConfig::default(),
        }
    }

    pub fn with_client(mut self, client: ClientConfig) -> Self {
        self.client = client;
        self
    }
}
