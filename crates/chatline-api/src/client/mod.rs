//! Terminal chat client.
//!
//! Talks to a running Chatline server over HTTP, keeps the conversation id
//! and message counter for the session, and prints replies with a
//! typewriter effect.

pub mod api;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod render;
pub mod session;
pub mod typewriter;
