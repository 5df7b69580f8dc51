//! Shared domain types for Chatline.
//!
//! Conversations, stored messages, LLM request/response shapes, configuration,
//! and the error enums shared by every layer.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror, secrecy.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
