//! Application configuration types for Chatline.
//!
//! `AppConfig` is built once at process start (defaults, then an optional
//! TOML file, then environment overrides) and passed by reference to every
//! component that needs server, database, model, or client settings.

use secrecy::SecretString;
use serde::Deserialize;

/// Top-level configuration. Every field has a default.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub llm: LlmConfig,
    pub client: ClientConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the static browser client. Skipped when absent.
    pub web_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            web_dir: "web".to_string(),
        }
    }
}

/// Relational store settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// sqlx connection URL, e.g. `sqlite://chatline.db?mode=rwc`.
    pub url: String,
    pub max_read_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://chatline.db?mode=rwc".to_string(),
            max_read_connections: 8,
        }
    }
}

/// Language-model provider settings.
///
/// Does not derive Clone or Serialize so the API key stays inside one
/// `SecretString`.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub provider_name: String,
    pub base_url: String,
    pub api_key: Option<SecretString>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub system_prompt: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider_name: "openai".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            max_tokens: 512,
            temperature: 0.7,
            system_prompt: "You are a helpful assistant. Be concise and friendly.".to_string(),
        }
    }
}

impl LlmConfig {
    /// The sampling and prompt settings the orchestrator needs.
    pub fn chat_settings(&self) -> ChatSettings {
        ChatSettings {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            system_prompt: self.system_prompt.clone(),
        }
    }
}

/// Fixed request parameters applied to every model call.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub system_prompt: String,
}

impl Default for ChatSettings {
    fn default() -> Self {
        LlmConfig::default().chat_settings()
    }
}

/// Interactive client settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub default_user_id: i64,
    pub timeout_secs: u64,
    /// Per-character delay of the typewriter effect; 0 prints at once.
    pub typewriter_delay_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            default_user_id: 1,
            timeout_secs: 60,
            typewriter_delay_ms: 8,
        }
    }
}
