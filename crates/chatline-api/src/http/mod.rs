//! HTTP/REST API layer for Chatline.
//!
//! Axum router with the status, chat and history endpoints, CORS, request
//! tracing and optional static serving of the browser client.

pub mod error;
pub mod handlers;
pub mod router;
