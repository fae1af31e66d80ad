//! Persistence layer: the pluggable journal backends.
//!
//! [`JournalStore`] is chosen once at startup from
//! [`StorageKind`](crate::config::StorageKind) and shared by all requests.
//! The flat file only supports appending; SQLite supports appending and
//! listing.

pub mod file;
pub mod sqlite;

pub use file::FileJournal;
pub use sqlite::SqlJournal;

use crate::config::{JournalConfig, StorageKind};
use crate::domain::AccessRecord;
use crate::error::JournalError;

/// The active journal backend.
#[derive(Debug, Clone)]
pub enum JournalStore {
    /// Append-only flat file.
    File(FileJournal),
    /// SQLite `users` table.
    Sql(SqlJournal),
}

impl JournalStore {
    /// Builds the backend named by `config.storage`.
    ///
    /// Returns `Ok(None)` when `STORAGE` held an unrecognised value, in
    /// which case the journal route stays inert.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::Database`] if the SQLite pool cannot be
    /// opened.
    pub async fn from_config(config: &JournalConfig) -> Result<Option<Self>, JournalError> {
        let store = match &config.storage {
            StorageKind::File => Some(Self::File(FileJournal::new(&config.journal_file))),
            StorageKind::Sql => Some(Self::Sql(
                SqlJournal::connect(&config.database_url, config.database_max_connections).await?,
            )),
            StorageKind::Disabled(_) => None,
        };
        Ok(store)
    }

    /// Short backend name for log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::File(_) => "file",
            Self::Sql(_) => "sql",
        }
    }

    /// Persists one record.
    ///
    /// # Errors
    ///
    /// Propagates the backend's I/O or database failure.
    pub async fn append(&self, record: &AccessRecord) -> Result<(), JournalError> {
        match self {
            Self::File(journal) => journal.append(record).await,
            Self::Sql(journal) => journal.append(record).await,
        }
    }

    /// Lists the timestamps recorded for `name`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::NotImplemented`] for the file backend and
    /// propagates database failures for SQLite.
    pub async fn list(&self, name: &str) -> Result<Vec<String>, JournalError> {
        match self {
            Self::File(journal) => journal.list(name).await,
            Self::Sql(journal) => journal.list(name).await,
        }
    }
}
