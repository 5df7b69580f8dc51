//! SQLite conversation repository implementation.
//!
//! Implements `ConversationRepository` from `chatline-core` using sqlx with
//! split read/write pools: raw queries, private Row structs, reads on the
//! reader pool and every write inside one writer transaction.

use chatline_core::chat::repository::ConversationRepository;
use chatline_types::chat::{
    DEFAULT_DISPLAY_NAME, MessageRole, MessageStatus, NewExchange, RecordedExchange,
    StoredMessage,
};
use chatline_types::error::RepositoryError;
use chrono::{DateTime, Utc};
use sqlx::{Row, Sqlite, Transaction};
use tracing::debug;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `ConversationRepository`.
pub struct SqliteConversationRepository {
    pool: DatabasePool,
}

impl SqliteConversationRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }
}

// ---------------------------------------------------------------------------
// Private Row types for SQLite-to-domain mapping
// ---------------------------------------------------------------------------

struct MessageRow {
    id: i64,
    role: String,
    conversation_id: String,
    message_no: i64,
    message_id: String,
    message: String,
    elapsed_time: i64,
    status: String,
    created_at: String,
    updated_at: String,
}

impl MessageRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            role: row.try_get("role")?,
            conversation_id: row.try_get("conversation_id")?,
            message_no: row.try_get("message_no")?,
            message_id: row.try_get("message_id")?,
            message: row.try_get("message")?,
            elapsed_time: row.try_get("elapsed_time")?,
            status: row.try_get("status")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    fn into_message(self) -> Result<StoredMessage, RepositoryError> {
        let role: MessageRole = self
            .role
            .parse()
            .map_err(|e: String| RepositoryError::Query(e))?;
        let status: MessageStatus = self
            .status
            .parse()
            .map_err(|e: String| RepositoryError::Query(e))?;

        Ok(StoredMessage {
            id: self.id,
            role,
            conversation_id: self.conversation_id,
            message_no: self.message_no as u32,
            message_id: self.message_id,
            text: self.message,
            elapsed_ms: self.elapsed_time as u64,
            status,
            created_at: parse_datetime(&self.created_at)?,
            updated_at: parse_datetime(&self.updated_at)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Pool and I/O failures mean the store is unreachable. Anything else is a
/// failed statement.
fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            RepositoryError::Connection(e.to_string())
        }
        other => RepositoryError::Query(other.to_string()),
    }
}

fn map_write_error(e: sqlx::Error, conversation_id: &str) -> RepositoryError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.message().contains("UNIQUE") => {
            RepositoryError::Conflict(format!(
                "message position already taken in conversation {conversation_id}"
            ))
        }
        other => map_sqlx_error(other),
    }
}

/// Insert one message inside `tx` and return it as stored.
#[allow(clippy::too_many_arguments)]
async fn insert_message(
    tx: &mut Transaction<'_, Sqlite>,
    conversation_id: &str,
    role: MessageRole,
    message_no: u32,
    message_id: &str,
    text: &str,
    elapsed_ms: u64,
    now: DateTime<Utc>,
) -> Result<StoredMessage, RepositoryError> {
    let stamp = format_datetime(&now);
    let result = sqlx::query(
        r#"INSERT INTO messages (role, conversation_id, message_no, message_id, message, elapsed_time, status, created_at, updated_at)
           VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
    )
    .bind(role.to_string())
    .bind(conversation_id)
    .bind(message_no as i64)
    .bind(message_id)
    .bind(text)
    .bind(elapsed_ms as i64)
    .bind(MessageStatus::Success.to_string())
    .bind(&stamp)
    .bind(&stamp)
    .execute(&mut **tx)
    .await
    .map_err(|e| map_write_error(e, conversation_id))?;

    Ok(StoredMessage {
        id: result.last_insert_rowid(),
        role,
        conversation_id: conversation_id.to_string(),
        message_no,
        message_id: message_id.to_string(),
        text: text.to_string(),
        elapsed_ms,
        status: MessageStatus::Success,
        created_at: now,
        updated_at: now,
    })
}

// ---------------------------------------------------------------------------
// ConversationRepository implementation
// ---------------------------------------------------------------------------

impl ConversationRepository for SqliteConversationRepository {
    async fn get_messages(
        &self,
        conversation_id: &str,
    ) -> Result<Vec<StoredMessage>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM messages WHERE conversation_id = ? ORDER BY id ASC")
            .bind(conversation_id)
            .fetch_all(&self.pool.reader)
            .await
            .map_err(map_sqlx_error)?;

        let mut messages = Vec::with_capacity(rows.len());
        for row in &rows {
            let msg_row =
                MessageRow::from_row(row).map_err(map_sqlx_error)?;
            messages.push(msg_row.into_message()?);
        }

        Ok(messages)
    }

    async fn record_exchange(
        &self,
        exchange: &NewExchange,
    ) -> Result<RecordedExchange, RepositoryError> {
        let conversation_id = exchange.conversation_id.as_str();
        let now = Utc::now();

        // Dropping the transaction without commit rolls everything back.
        let mut tx = self
            .pool
            .writer
            .begin()
            .await
            .map_err(map_sqlx_error)?;

        let count: i64 = sqlx::query("SELECT COUNT(*) AS cnt FROM messages WHERE conversation_id = ?")
            .bind(conversation_id)
            .fetch_one(&mut *tx)
            .await
            .and_then(|row| row.try_get("cnt"))
            .map_err(map_sqlx_error)?;
        let position = count as u32;

        let user_message = insert_message(
            &mut tx,
            conversation_id,
            MessageRole::User,
            position,
            &exchange.user_message_id,
            &exchange.user_text,
            0,
            now,
        )
        .await?;

        let assistant_message = insert_message(
            &mut tx,
            conversation_id,
            MessageRole::Assistant,
            position + 1,
            &exchange.assistant_message_id,
            &exchange.assistant_text,
            exchange.assistant_elapsed_ms,
            now,
        )
        .await?;

        let updated = sqlx::query(
            "UPDATE conversations SET message_count = message_count + 2, updated_at = ? WHERE conversation_id = ?",
        )
        .bind(format_datetime(&now))
        .bind(conversation_id)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        let conversation_created = updated.rows_affected() == 0;
        if conversation_created {
            let stamp = format_datetime(&now);
            sqlx::query(
                r#"INSERT INTO conversations (display_name, conversation_id, user_id, message_count, created_at, updated_at)
                   VALUES (?, ?, ?, 2, ?, ?)"#,
            )
            .bind(DEFAULT_DISPLAY_NAME)
            .bind(conversation_id)
            .bind(exchange.user_id)
            .bind(&stamp)
            .bind(&stamp)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_write_error(e, conversation_id))?;
        }

        tx.commit()
            .await
            .map_err(map_sqlx_error)?;

        debug!(
            conversation_id,
            user_message_no = user_message.message_no,
            conversation_created,
            "Exchange committed"
        );

        Ok(RecordedExchange {
            user_message,
            assistant_message,
            conversation_created,
        })
    }
}
