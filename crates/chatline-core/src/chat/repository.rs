//! ConversationRepository trait definition.

use chatline_types::chat::{NewExchange, RecordedExchange, StoredMessage};
use chatline_types::error::RepositoryError;

/// Repository trait for conversation and message persistence.
///
/// Implementations live in chatline-infra (e.g., `SqliteConversationRepository`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait ConversationRepository: Send + Sync {
    /// All messages of a conversation in insertion order.
    ///
    /// An unknown conversation yields an empty list, not an error.
    fn get_messages(
        &self,
        conversation_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<StoredMessage>, RepositoryError>> + Send;

    /// Atomically append a user/assistant pair and create or update the
    /// conversation record.
    ///
    /// Sequence numbers are derived from the messages already stored for the
    /// conversation: the user message gets `count`, the assistant `count + 1`.
    /// Either everything is written or nothing is.
    fn record_exchange(
        &self,
        exchange: &NewExchange,
    ) -> impl std::future::Future<Output = Result<RecordedExchange, RepositoryError>> + Send;
}
