//! Chatline application layer: REST API, CLI definitions and the terminal
//! chat client. The `chatline` binary in `main.rs` wires these together.

pub mod cli;
pub mod client;
pub mod http;
pub mod state;
