//! Conversation persistence abstractions and the chat pipeline.
//!
//! - `repository`: the `ConversationRepository` port implemented by infra
//! - `transcript`: renders stored history into the model prompt
//! - `orchestrator`: history + model call -> reply
//! - `service`: orchestrator + transactional persistence, history lookup

pub mod orchestrator;
pub mod repository;
pub mod service;
pub mod transcript;

#[cfg(test)]
pub(crate) mod test_support;
