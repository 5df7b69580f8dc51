//! Styled text output shared by the chat loop and the `history` command.

use std::io::{self, Write};

use console::style;

use chatline_types::chat::{ConversationHistory, MessageRole};

pub fn write_banner<W: Write>(out: &mut W, api_url: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "  {}", style("Chatline").cyan().bold())?;
    writeln!(out, "  {}  {}", style("Server:").bold(), style(api_url).dim())?;
    writeln!(out)?;
    writeln!(
        out,
        "  {}",
        style("Type /help for commands, /quit or Ctrl+D to exit").dim()
    )?;
    writeln!(out, "  {}", style("---").dim())?;
    writeln!(out)
}

pub fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "  {}", style("Available commands:").bold())?;
    writeln!(out)?;
    writeln!(out, "  {}     Start a new conversation", style("/new").cyan())?;
    writeln!(out, "  {} Show this conversation's history", style("/history").cyan())?;
    writeln!(out, "  {}    Show this help message", style("/help").cyan())?;
    writeln!(out, "  {}    End the chat session", style("/quit").cyan())?;
    writeln!(out)
}

/// Print `history` as one `role: message` line per entry.
pub fn write_history<W: Write>(out: &mut W, history: &ConversationHistory) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "  {} {} ({} messages)",
        style("Conversation").bold(),
        style(&history.conversation_id).cyan(),
        history.message_count
    )?;
    if history.messages.is_empty() {
        writeln!(out, "  {}", style("No messages stored.").dim())?;
    }
    for entry in &history.messages {
        let label = match entry.role {
            MessageRole::User => style("user").green(),
            MessageRole::Assistant => style("assistant").cyan(),
            MessageRole::System => style("system").dim(),
        };
        writeln!(out, "  {}: {}", label.bold(), entry.message)?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatline_types::chat::HistoryEntry;

    fn plain(bytes: Vec<u8>) -> String {
        console::strip_ansi_codes(&String::from_utf8(bytes).unwrap()).to_string()
    }

    #[test]
    fn test_write_history_lines() {
        let history = ConversationHistory {
            conversation_id: "abcd1234-wxyz".to_string(),
            message_count: 2,
            messages: vec![
                HistoryEntry {
                    role: MessageRole::User,
                    message: "Hi".to_string(),
                },
                HistoryEntry {
                    role: MessageRole::Assistant,
                    message: "Hello!".to_string(),
                },
            ],
        };
        let mut out = Vec::new();
        write_history(&mut out, &history).unwrap();
        let text = plain(out);
        assert!(text.contains("abcd1234-wxyz (2 messages)"));
        assert!(text.contains("user: Hi"));
        assert!(text.contains("assistant: Hello!"));
    }

    #[test]
    fn test_write_empty_history() {
        let history = ConversationHistory {
            conversation_id: "missing0-0000".to_string(),
            message_count: 0,
            messages: vec![],
        };
        let mut out = Vec::new();
        write_history(&mut out, &history).unwrap();
        assert!(plain(out).contains("No messages stored."));
    }
}
