//! Append-only flat-file journal.

use std::path::{Path, PathBuf};

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::domain::AccessRecord;
use crate::error::JournalError;

/// Write-only journal that appends one `name,timestamp` line per record.
///
/// The file is opened in append mode for every write and closed again
/// afterwards. Concurrent writers rely on `O_APPEND`: each record is
/// handed to the OS as a single buffer, so lines do not interleave.
#[derive(Debug, Clone)]
pub struct FileJournal {
    path: PathBuf,
}

impl FileJournal {
    /// Creates a journal backed by `path`. The file is created lazily on
    /// the first append.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the journal file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `record` as one line.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::Io`] if the file cannot be opened or written.
    pub async fn append(&self, record: &AccessRecord) -> Result<(), JournalError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(record.to_line().as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Reading back is not supported by the flat file.
    ///
    /// # Errors
    ///
    /// Always returns [`JournalError::NotImplemented`].
    pub async fn list(&self, _name: &str) -> Result<Vec<String>, JournalError> {
        Err(JournalError::NotImplemented("listing the journal file"))
    }
}
