//! `chatline history <id>`: one-shot history fetch.

use std::time::Duration;

use chatline_types::config::ClientConfig;

use crate::client::api::ApiClient;
use crate::client::render::write_history;

pub async fn history(
    config: &ClientConfig,
    conversation_id: &str,
    api_url: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let base_url = api_url.unwrap_or_else(|| config.api_base_url.clone());
    let client = ApiClient::new(&base_url, Duration::from_secs(config.timeout_secs))?;
    let history = client.history(conversation_id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&history)?);
    } else {
        write_history(&mut std::io::stdout(), &history)?;
    }
    Ok(())
}
