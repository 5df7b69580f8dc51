//! CLI command definitions for the `chatline` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod chat;
pub mod history;
pub mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Conversational chat service with persistent history.
#[derive(Parser)]
#[command(name = "chatline", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./chatline.toml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Host to bind to (overrides config).
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config).
        #[arg(short, long)]
        port: Option<u16>,

        /// Export spans to stdout through OpenTelemetry.
        #[arg(long)]
        otel: bool,
    },

    /// Chat interactively with a running server.
    Chat {
        /// Base URL of the API (overrides config).
        #[arg(long)]
        api_url: Option<String>,

        /// User id sent with every message (overrides config).
        #[arg(long)]
        user_id: Option<i64>,
    },

    /// Print the stored history of a conversation.
    History {
        /// Conversation identifier.
        conversation_id: String,

        /// Base URL of the API (overrides config).
        #[arg(long)]
        api_url: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::parse_from(["chatline", "-vv", "serve", "--port", "9000", "--otel"]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Serve { host, port, otel } => {
                assert!(host.is_none());
                assert_eq!(port, Some(9000));
                assert!(otel);
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_history_with_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["chatline", "history", "abcd1234-wxyz", "--json"]);
        assert!(cli.json);
        match cli.command {
            Commands::History { conversation_id, .. } => {
                assert_eq!(conversation_id, "abcd1234-wxyz");
            }
            _ => panic!("expected history"),
        }
    }
}
