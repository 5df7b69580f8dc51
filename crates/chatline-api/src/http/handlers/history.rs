//! GET /get-conversation-history/{conversation_id}

use axum::Json;
use axum::extract::{Path, State};

use chatline_types::chat::ConversationHistory;

use crate::http::error::AppError;
use crate::state::AppState;

/// Unknown identifiers answer 200 with an empty list.
pub async fn get_conversation_history(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
) -> Result<Json<ConversationHistory>, AppError> {
    let history = state.chat_service.history(&conversation_id).await?;
    Ok(Json(history))
}
