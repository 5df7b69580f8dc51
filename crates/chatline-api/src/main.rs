//! Chatline CLI and REST API entry point.
//!
//! Binary name: `chatline`
//!
//! Parses CLI arguments, sets up tracing and configuration, then runs the
//! server or one of the client commands.

use clap::Parser;
use clap_complete::generate;

use chatline_api::cli::{self, Cli, Commands};
use chatline_infra::config::load_config;
use chatline_observe::tracing_setup::{LogOptions, default_directive, init_tracing, shutdown_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need config or logging
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "chatline", &mut std::io::stdout());
        return Ok(());
    }

    let enable_otel = matches!(cli.command, Commands::Serve { otel: true, .. });
    init_tracing(&LogOptions {
        default_directive: default_directive(cli.verbose, cli.quiet).to_string(),
        json: cli.json,
        enable_otel,
    })
    .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    let config = load_config(cli.config.as_deref())?;

    let result = match cli.command {
        Commands::Serve { host, port, .. } => cli::serve::serve(config, host, port).await,
        Commands::Chat { api_url, user_id } => {
            cli::chat::chat(&config.client, api_url, user_id).await
        }
        Commands::History {
            conversation_id,
            api_url,
        } => cli::history::history(&config.client, &conversation_id, api_url, cli.json).await,
        Commands::Completions { .. } => Ok(()),
    };

    shutdown_tracing();
    result
}
