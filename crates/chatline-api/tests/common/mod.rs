//! Shared fixtures for the router and client integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chatline_api::state::AppState;
use chatline_core::llm::box_provider::BoxLlmProvider;
use chatline_core::llm::provider::LlmProvider;
use chatline_infra::sqlite::pool::DatabasePool;
use chatline_types::config::{ChatSettings, ServerConfig};
use chatline_types::llm::{CompletionRequest, CompletionResponse, LlmError, StopReason, Usage};

/// What the stub model answers with.
#[derive(Clone)]
pub enum Reply {
    Echo,
    Fixed(String),
    Fail,
}

/// Model stand-in that records every request it receives.
#[derive(Clone)]
pub struct StubProvider {
    reply: Reply,
    pub requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl StubProvider {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl LlmProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        let content = match &self.reply {
            Reply::Echo => {
                let turn = &request.messages[0].content;
                let last = turn.rsplit("User: ").next().unwrap_or_default();
                format!("You said: {last}")
            }
            Reply::Fixed(text) => text.clone(),
            Reply::Fail => {
                return Err(LlmError::Provider {
                    message: "upstream unavailable".to_string(),
                });
            }
        };
        Ok(CompletionResponse {
            id: "stub-1".to_string(),
            content,
            model: request.model.clone(),
            stop_reason: StopReason::EndTurn,
            usage: Usage::default(),
        })
    }
}

pub struct TestApp {
    pub state: AppState,
    pub pool: DatabasePool,
    pub provider: StubProvider,
    _dir: tempfile::TempDir,
}

pub async fn test_app(reply: Reply) -> TestApp {
    test_app_with_server(reply, ServerConfig::default()).await
}

pub async fn test_app_with_server(reply: Reply, server: ServerConfig) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("chat.db").display());
    let pool = DatabasePool::new(&url, 4).await.unwrap();
    let provider = StubProvider::new(reply);
    let state = AppState::from_parts(
        pool.clone(),
        BoxLlmProvider::new(provider.clone()),
        ChatSettings::default(),
        server,
    );
    TestApp {
        state,
        pool,
        provider,
        _dir: dir,
    }
}

pub async fn count_rows(pool: &DatabasePool, table: &str) -> i64 {
    let row: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(&pool.reader)
        .await
        .unwrap();
    row.0
}
