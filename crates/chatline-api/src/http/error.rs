//! Application error type mapping to HTTP responses.
//!
//! Every failure surfaces as `500 {"detail": "<description>"}`; callers do
//! not distinguish client from server faults.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

use chatline_types::error::ChatError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub struct AppError(pub ChatError);

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let detail = self.0.to_string();
        error!(error = %detail, "Request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": detail })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatline_types::error::RepositoryError;
    use chatline_types::llm::LlmError;

    #[test]
    fn test_every_error_is_500() {
        let errors = [
            ChatError::EmptyMessage,
            ChatError::EmptyResponse,
            ChatError::Llm(LlmError::RateLimited),
            ChatError::Repository(RepositoryError::Connection("pool timed out".to_string())),
        ];
        for e in errors {
            let response = AppError::from(e).into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[tokio::test]
    async fn test_body_carries_detail() {
        let response = AppError::from(ChatError::EmptyResponse).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["detail"], "Empty response from language model");
    }
}
