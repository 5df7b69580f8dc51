//! LLM provider implementations.
//!
//! Contains the OpenAI-compatible implementation of the [`LlmProvider`]
//! trait defined in `chatline-core`, plus [`create_provider`], which builds
//! it from the application's [`LlmConfig`].
//!
//! [`LlmProvider`]: chatline_core::llm::provider::LlmProvider

pub mod openai_compat;

use secrecy::{ExposeSecret, SecretString};
use tracing::info;

use chatline_core::llm::box_provider::BoxLlmProvider;
use chatline_types::config::LlmConfig;
use chatline_types::llm::LlmError;

use self::openai_compat::OpenAiCompatibleProvider;
use self::openai_compat::config::{OPENAI_BASE_URL, OpenAiCompatConfig};

/// Create a [`BoxLlmProvider`] from the configured provider settings.
///
/// # Errors
///
/// Returns [`LlmError::AuthenticationFailed`] when no non-blank API key is
/// configured.
pub fn create_provider(config: &LlmConfig) -> Result<BoxLlmProvider, LlmError> {
    let key = config
        .api_key
        .as_ref()
        .map(|k| k.expose_secret().trim())
        .filter(|k| !k.is_empty())
        .ok_or(LlmError::AuthenticationFailed)?;

    let base_url = if config.base_url.trim().is_empty() {
        OPENAI_BASE_URL.to_string()
    } else {
        config.base_url.trim_end_matches('/').to_string()
    };

    info!(
        provider = %config.provider_name,
        base_url = %base_url,
        model = %config.model,
        "Configured LLM provider"
    );

    let provider = OpenAiCompatibleProvider::new(OpenAiCompatConfig {
        provider_name: config.provider_name.clone(),
        base_url,
        api_key: SecretString::from(key),
        model: config.model.clone(),
    });
    Ok(BoxLlmProvider::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_authentication_failure() {
        let config = LlmConfig::default();
        assert!(matches!(
            create_provider(&config),
            Err(LlmError::AuthenticationFailed)
        ));
    }

    #[test]
    fn test_blank_key_is_authentication_failure() {
        let config = LlmConfig {
            api_key: Some(SecretString::from("   ")),
            ..LlmConfig::default()
        };
        assert!(create_provider(&config).is_err());
    }

    #[test]
    fn test_provider_named_after_config() {
        let config = LlmConfig {
            provider_name: "local-gateway".to_string(),
            base_url: "http://localhost:4000/v1/".to_string(),
            api_key: Some(SecretString::from("sk-local")),
            ..LlmConfig::default()
        };
        let provider = create_provider(&config).unwrap();
        assert_eq!(provider.name(), "local-gateway");
    }
}
