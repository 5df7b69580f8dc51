//! GET /client-config - settings the browser client starts from.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ClientConfigResponse {
    pub default_user_id: i64,
    pub timeout_secs: u64,
    pub typewriter_delay_ms: u64,
}

pub async fn get_client_config(State(state): State<AppState>) -> Json<ClientConfigResponse> {
    Json(ClientConfigResponse {
        default_user_id: state.client.default_user_id,
        timeout_secs: state.client.timeout_secs,
        typewriter_delay_ms: state.client.typewriter_delay_ms,
    })
}
