//! Chat endpoint.
//!
//! POST /chat-message?message=..&user_id=..&message_id=..&message_count=..&conversation_id=..
//!
//! Parameters travel in the query string, not the body. A missing or
//! malformed parameter is rejected by the `Query` extractor with 400.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use chatline_core::chat::service::SendMessage;
use chatline_types::chat::ChatReply;

use crate::http::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatMessageQuery {
    pub message: String,
    pub user_id: i64,
    #[serde(default)]
    pub message_id: Option<String>,
    pub message_count: u32,
    #[serde(default)]
    pub conversation_id: Option<String>,
}

impl From<ChatMessageQuery> for SendMessage {
    fn from(q: ChatMessageQuery) -> Self {
        SendMessage {
            text: q.message,
            user_id: q.user_id,
            message_id: q.message_id,
            message_count: q.message_count,
            conversation_id: q.conversation_id,
        }
    }
}

/// POST /chat-message
pub async fn post_chat_message(
    State(state): State<AppState>,
    Query(query): Query<ChatMessageQuery>,
) -> Result<Json<ChatReply>, AppError> {
    let reply = state.chat_service.send_message(query.into()).await?;
    Ok(Json(reply))
}
