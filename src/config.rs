//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Only `STORAGE` changes behaviour; the
//! rest locate the storage files and tune logging.

use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Storage backend selected by the `STORAGE` variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageKind {
    /// Append-only flat file (`STORAGE=file`, the default).
    File,
    /// SQLite `users` table (`STORAGE=sql`).
    Sql,
    /// Any other value. The journal route accepts requests but does nothing.
    Disabled(String),
}

impl StorageKind {
    /// Maps a raw `STORAGE` value onto a backend kind. Matching is exact,
    /// so `FILE` or `Sql` disable the journal just like any unknown value.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "file" => Self::File,
            "sql" => Self::Sql,
            other => Self::Disabled(other.to_string()),
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => f.write_str("file"),
            Self::Sql => f.write_str("sql"),
            Self::Disabled(raw) => write!(f, "disabled ({raw:?})"),
        }
    }
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per line.
    Json,
}

/// Top-level service configuration.
///
/// Loaded once at startup via [`JournalConfig::from_env`].
#[derive(Debug, Clone)]
pub struct JournalConfig {
    /// Socket address to bind the HTTP server to (default `0.0.0.0:8080`).
    pub listen_addr: SocketAddr,

    /// Which journal backend handles `/user`.
    pub storage: StorageKind,

    /// Path of the append-only journal file.
    pub journal_file: PathBuf,

    /// SQLite connection string.
    pub database_url: String,

    /// Maximum number of SQLite connections in the pool.
    pub database_max_connections: u32,

    /// Log line format.
    pub log_format: LogFormat,
}

impl JournalConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, std::net::AddrParseError> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = env_or("LISTEN_ADDR", "0.0.0.0:8080").parse()?;
        let storage = StorageKind::parse(&env_or("STORAGE", "file"));
        let journal_file = PathBuf::from(env_or("JOURNAL_FILE", "db.txt"));
        let database_url = env_or("DATABASE_URL", "sqlite://db.sql");
        let database_max_connections = parse_env("DATABASE_MAX_CONNECTIONS", 5);

        let log_format = match env_or("LOG_FORMAT", "text").to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            listen_addr,
            storage,
            journal_file,
            database_url,
            database_max_connections,
            log_format,
        })
    }
}

/// Reads an environment variable, treating unset and empty alike.
fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
