//! Transcript rendering for the model prompt.

use chatline_types::chat::StoredMessage;

/// Transcript used when the request carries no conversation identifier.
pub const NEW_CONVERSATION_TRANSCRIPT: &str = "It's a new conversation.";

/// Render prior messages as one `role: text` line each.
pub fn render_transcript(messages: &[StoredMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        out.push_str(&format!("{}: {}\n", message.role, message.text));
    }
    out
}

/// The single user turn sent to the model: transcript plus the new message.
pub fn user_turn(transcript: &str, message: &str) -> String {
    format!("The conversation history is as follows: {transcript}\nUser: {message}")
}
