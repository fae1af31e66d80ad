//! A single journal entry.
//!
//! [`AccessRecord`] pairs a caller-supplied name with a server-generated
//! RFC 3339 timestamp. Construction is the only place the non-empty name
//! invariant is checked, so every backend can trust what it receives.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::JournalError;

/// One access event: who, and when the server saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessRecord {
    name: String,
    timestamp: String,
}

impl AccessRecord {
    /// Creates a record stamped with the current UTC time.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::MissingName`] if `name` is empty.
    pub fn now(name: impl Into<String>) -> Result<Self, JournalError> {
        Self::at(name, Utc::now())
    }

    /// Creates a record stamped with `at`, truncated to whole seconds.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::MissingName`] if `name` is empty.
    pub fn at(name: impl Into<String>, at: DateTime<Utc>) -> Result<Self, JournalError> {
        let name = name.into();
        if name.is_empty() {
            return Err(JournalError::MissingName);
        }
        Ok(Self {
            name,
            timestamp: at.to_rfc3339_opts(SecondsFormat::Secs, true),
        })
    }

    /// Name the access was recorded for.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// RFC 3339 timestamp, e.g. `2026-10-17T09:30:00Z`.
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Journal file line, newline included.
    #[must_use]
    pub fn to_line(&self) -> String {
        format!("{self}\n")
    }
}

impl fmt::Display for AccessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.name, self.timestamp)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn empty_name_is_rejected() {
        let result = AccessRecord::now("");
        assert!(matches!(result, Err(JournalError::MissingName)));
    }

    #[test]
    fn timestamp_is_rfc3339_with_seconds() {
        let Some(at) = Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).single() else {
            panic!("valid date");
        };
        let Ok(record) = AccessRecord::at("alice", at) else {
            panic!("valid record");
        };
        assert_eq!(record.timestamp(), "2026-10-17T09:30:00Z");
        assert!(DateTime::parse_from_rfc3339(record.timestamp()).is_ok());
    }

    #[test]
    fn line_format_is_name_comma_timestamp() {
        let Some(at) = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).single() else {
            panic!("valid date");
        };
        let Ok(record) = AccessRecord::at("bob", at) else {
            panic!("valid record");
        };
        assert_eq!(record.to_line(), "bob,2026-01-02T03:04:05Z\n");
    }

    #[test]
    fn now_stamps_current_time() {
        let before = Utc::now().timestamp();
        let Ok(record) = AccessRecord::now("carol") else {
            panic!("valid record");
        };
        let Ok(parsed) = DateTime::parse_from_rfc3339(record.timestamp()) else {
            panic!("unparsable timestamp");
        };
        assert!(parsed.timestamp() >= before);
        assert_eq!(record.name(), "carol");
    }
}
