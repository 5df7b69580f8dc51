//! HTTP request handlers for the REST API.

pub mod chat;
pub mod client_config;
pub mod history;
pub mod status;
