//! `chatline chat`: interactive terminal client.

use std::time::Duration;

use chatline_types::config::ClientConfig;

use crate::client::api::ApiClient;
use crate::client::loop_runner::run_chat_loop;

pub async fn chat(
    config: &ClientConfig,
    api_url: Option<String>,
    user_id: Option<i64>,
) -> anyhow::Result<()> {
    let base_url = api_url.unwrap_or_else(|| config.api_base_url.clone());
    let client = ApiClient::new(&base_url, Duration::from_secs(config.timeout_secs))?;
    run_chat_loop(
        &client,
        user_id.unwrap_or(config.default_user_id),
        Duration::from_millis(config.typewriter_delay_ms),
    )
    .await
}
