//! Infrastructure layer for Chatline.
//!
//! Contains implementations of the traits defined in `chatline-core`:
//! SQLite conversation storage, the OpenAI-compatible LLM provider, and the
//! layered configuration loader.

pub mod config;
pub mod llm;
pub mod sqlite;
