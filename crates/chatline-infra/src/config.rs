//! Layered configuration loader for Chatline.
//!
//! Starts from [`AppConfig::default()`], overlays an optional TOML file, then
//! applies environment overrides. A file that exists but fails to parse, or
//! an override that does not parse, is a hard [`ConfigError`].

use std::path::{Path, PathBuf};

use secrecy::SecretString;
use tracing::debug;

use chatline_types::config::AppConfig;
use chatline_types::error::ConfigError;

/// File picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "chatline.toml";

/// Load configuration using the process environment for overrides.
///
/// An explicit `path` must exist. Without one, `chatline.toml` in the working
/// directory is used when present.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_config_with(path, |key| std::env::var(key).ok())
}

/// Same as [`load_config`] with an injectable environment lookup.
pub fn load_config_with(
    path: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_file(path)?,
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                read_file(&default_path)?
            } else {
                debug!("No {DEFAULT_CONFIG_FILE} found, using defaults");
                AppConfig::default()
            }
        }
    };
    apply_env_overrides(&mut config, lookup)?;
    Ok(config)
}

fn read_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let config = toml::from_str::<AppConfig>(&content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    debug!(path = %path.display(), "Loaded config file");
    Ok(config)
}

/// Overlay environment variables onto `config`.
///
/// Blank values are ignored. `CHATLINE_DATABASE_URL` wins over `DATABASE_URL`.
pub fn apply_env_overrides(
    config: &mut AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), ConfigError> {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(host) = get("CHATLINE_HOST") {
        config.server.host = host;
    }
    if let Some(port) = get("CHATLINE_PORT") {
        config.server.port = parse_env("CHATLINE_PORT", &port)?;
    }
    if let Some(web_dir) = get("CHATLINE_WEB_DIR") {
        config.server.web_dir = web_dir;
    }
    if let Some(url) = get("CHATLINE_DATABASE_URL").or_else(|| get("DATABASE_URL")) {
        config.database.url = url;
    }
    if let Some(key) = get("OPENAI_API_KEY") {
        config.llm.api_key = Some(SecretString::from(key));
    }
    if let Some(base_url) = get("OPENAI_BASE_URL") {
        config.llm.base_url = base_url;
    }
    if let Some(model) = get("CHATLINE_MODEL") {
        config.llm.model = model;
    }
    if let Some(api_base_url) = get("API_BASE_URL") {
        config.client.api_base_url = api_base_url;
    }
    if let Some(user_id) = get("DEFAULT_USER_ID") {
        config.client.default_user_id = parse_env("DEFAULT_USER_ID", &user_id)?;
    }
    Ok(())
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        key: key.to_string(),
        value: value.to_string(),
    })
}
