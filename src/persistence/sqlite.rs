//! SQLite implementation of the journal.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::domain::AccessRecord;
use crate::error::JournalError;

const CREATE_USERS_TABLE: &str = r#"CREATE TABLE IF NOT EXISTS users (
    "id" INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    "user" TEXT,
    "timestamp" TEXT
)"#;

/// SQLite-backed journal using `sqlx::SqlitePool`.
///
/// Every operation first makes sure the `users` table exists, so a fresh
/// database file needs no setup step.
#[derive(Debug, Clone)]
pub struct SqlJournal {
    pool: SqlitePool,
}

impl SqlJournal {
    /// Creates a journal on top of an existing connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens a pool for `database_url`, creating the database file if it
    /// does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::Database`] if the URL is malformed or the
    /// database cannot be opened.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, JournalError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?;
        Ok(Self::new(pool))
    }

    /// Creates the `users` table unless it already exists.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::Database`] on database failure.
    pub async fn ensure_table(&self) -> Result<(), JournalError> {
        tracing::debug!("ensuring users table");
        sqlx::query(CREATE_USERS_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Inserts `record` as a new row.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::Database`] on database failure.
    pub async fn append(&self, record: &AccessRecord) -> Result<(), JournalError> {
        self.ensure_table().await?;
        let result = sqlx::query(r#"INSERT INTO users ("user", "timestamp") VALUES (?, ?)"#)
            .bind(record.name())
            .bind(record.timestamp())
            .execute(&self.pool)
            .await?;
        tracing::debug!(row_id = result.last_insert_rowid(), "inserted journal row");
        Ok(())
    }

    /// Returns the timestamps recorded for `name`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::Database`] on database failure.
    pub async fn list(&self, name: &str) -> Result<Vec<String>, JournalError> {
        self.ensure_table().await?;
        let timestamps = sqlx::query_scalar::<_, String>(
            r#"SELECT "timestamp" FROM users WHERE "user" = ? ORDER BY "id" ASC"#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;
        tracing::debug!(rows = timestamps.len(), "loaded journal rows");
        Ok(timestamps)
    }
}
