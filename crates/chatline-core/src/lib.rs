//! Chat orchestration and repository trait definitions for Chatline.
//!
//! This crate defines the "ports" (repository and LLM provider traits) that
//! the infrastructure layer implements. It depends only on `chatline-types`
//! -- never on `chatline-infra` or any database/IO crate.

pub mod chat;
pub mod id;
pub mod llm;
