//! HTTP client for the Chatline REST API.

use std::time::Duration;

use reqwest::Url;
use serde::Serialize;
use serde::de::DeserializeOwned;

use chatline_types::chat::{ChatReply, ConversationHistory};

/// Failures seen by the client, worded the way they are shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("API Error: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("Connection Error: {0}")]
    Connection(#[from] reqwest::Error),

    #[error("Invalid API URL '{0}'")]
    InvalidUrl(String),
}

/// Query parameters of `POST /chat-message`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatParams {
    pub message: String,
    pub user_id: i64,
    pub message_id: String,
    pub message_count: u32,
    /// Empty until the server has assigned one.
    pub conversation_id: String,
}

pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let base = Url::parse(&base_url).map_err(|_| ClientError::InvalidUrl(base_url.clone()))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url));
        }
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn send_message(&self, params: &ChatParams) -> Result<ChatReply, ClientError> {
        let response = self
            .http
            .post(self.endpoint(&["chat-message"])?)
            .query(params)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn history(&self, conversation_id: &str) -> Result<ConversationHistory, ClientError> {
        let response = self
            .http
            .get(self.endpoint(&["get-conversation-history", conversation_id])?)
            .send()
            .await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Api {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response.json::<T>().await?)
}
