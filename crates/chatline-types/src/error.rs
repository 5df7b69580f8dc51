use thiserror::Error;

use crate::llm::LlmError;

/// Errors from repository operations (used by trait definitions in chatline-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error: {0}")]
    Connection(String),

    #[error("query error: {0}")]
    Query(String),

    #[error("conflict: {0}")]
    Conflict(String),
}

/// Errors surfaced by the chat orchestrator and chat service.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("No message provided")]
    EmptyMessage,

    #[error("language model call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("Empty response from language model")]
    EmptyResponse,

    #[error("storage error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Errors raised while assembling the application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse config file {path}: {message}")]
    Parse { path: String, message: String },

    #[error("invalid value for {key}: '{value}'")]
    InvalidEnv { key: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }

    #[test]
    fn test_chat_error_wraps_llm_error() {
        let err: ChatError = LlmError::AuthenticationFailed.into();
        assert!(matches!(err, ChatError::Llm(LlmError::AuthenticationFailed)));
        assert_eq!(err.to_string(), "language model call failed: authentication failed");
    }

    #[test]
    fn test_config_error_names_key() {
        let err = ConfigError::InvalidEnv {
            key: "CHATLINE_PORT".to_string(),
            value: "eighty".to_string(),
        };
        assert!(err.to_string().contains("CHATLINE_PORT"));
        assert!(err.to_string().contains("eighty"));
    }
}
