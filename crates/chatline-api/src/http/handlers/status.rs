//! Liveness endpoints.
//!
//! - GET /        - `{"status":"Working"}`
//! - GET /health  - `{"status":"Healthy"}`

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// GET /
pub async fn root() -> Json<StatusResponse> {
    Json(StatusResponse { status: "Working" })
}

/// GET /health
pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse { status: "Healthy" })
}
