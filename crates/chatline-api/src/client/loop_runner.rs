//! Main chat loop: read a line, send it, print the reply.

use std::io::Write;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use super::api::ApiClient;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::render::{write_banner, write_help, write_history};
use super::session::ChatSession;
use super::typewriter::typewrite;

fn thinking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(spinner_style);
    }
    spinner.set_message("thinking...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Run the interactive chat loop against `client` until the user quits.
///
/// Request failures are printed inline and the loop continues.
pub async fn run_chat_loop(
    client: &ApiClient,
    user_id: i64,
    typewriter_delay: Duration,
) -> anyhow::Result<()> {
    let prompt = format!("{} ", style("You >").green().bold());
    let (mut input, mut out) =
        ChatInput::new(prompt).map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    write_banner(&mut out, client.base_url())?;
    let mut session = ChatSession::new(user_id);

    loop {
        let text = match input.read_line().await {
            InputEvent::Eof | InputEvent::Interrupted => break,
            InputEvent::Message(text) if text.is_empty() => continue,
            InputEvent::Message(text) => text,
        };

        if let Some(cmd) = commands::parse(&text) {
            match cmd {
                ChatCommand::Help => write_help(&mut out)?,
                ChatCommand::Quit => break,
                ChatCommand::New => {
                    session.reset();
                    writeln!(out, "\n  {}\n", style("Started a new conversation.").dim())?;
                }
                ChatCommand::History => match session.conversation_id() {
                    None => writeln!(out, "\n  {}\n", style("No conversation yet.").dim())?,
                    Some(id) => match client.history(id).await {
                        Ok(history) => write_history(&mut out, &history)?,
                        Err(e) => writeln!(out, "\n  {}\n", style(e).red())?,
                    },
                },
                ChatCommand::Unknown(name) => writeln!(
                    out,
                    "\n  {} Unknown command: {}. Type /help for available commands.\n",
                    style("?").yellow().bold(),
                    style(name).dim()
                )?,
            }
            continue;
        }

        let params = session.next_message(&text);
        debug!(message_count = params.message_count, "Sending message");

        let spinner = thinking_spinner();
        let result = client.send_message(&params).await;
        spinner.finish_and_clear();

        match result {
            Ok(reply) => {
                session.accept(&reply);
                write!(out, "{} ", style("Bot >").cyan().bold())?;
                typewrite(&mut out, &reply.message, typewriter_delay).await?;
            }
            Err(e) => writeln!(out, "{}", style(e).red())?,
        }
    }

    writeln!(out, "\n  {}", style("Session ended.").dim())?;
    input.finish();
    Ok(())
}
