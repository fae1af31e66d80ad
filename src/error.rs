//! Journal error types with HTTP status code mapping.
//!
//! [`JournalError`] is the central error type for request handling. Each
//! variant maps to one HTTP status code. Bodies are short plain-text
//! messages: clients only ever see the status, never the underlying cause.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Request-level error enum with HTTP status code mapping.
///
/// | Variant          | HTTP Status                  |
/// |------------------|------------------------------|
/// | `MissingName`    | 417 Expectation Failed       |
/// | `NotImplemented` | 501 Not Implemented          |
/// | `Io`             | 500 Internal Server Error    |
/// | `Database`       | 500 Internal Server Error    |
/// | `Metrics`        | 500 Internal Server Error    |
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    /// The `name` form field was absent or empty.
    #[error("name not defined")]
    MissingName,

    /// The active backend does not support the requested operation.
    #[error("{0} is not supported by this backend")]
    NotImplemented(&'static str),

    /// Journal file could not be opened or written.
    #[error("journal file error: {0}")]
    Io(#[from] std::io::Error),

    /// SQLite statement failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Metrics registration or encoding failed.
    #[error("metrics error: {0}")]
    Metrics(#[from] prometheus::Error),
}

impl JournalError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingName => StatusCode::EXPECTATION_FAILED,
            Self::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            Self::Io(_) | Self::Database(_) | Self::Metrics(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Plain-text body sent to the client.
    #[must_use]
    pub const fn public_message(&self) -> &'static str {
        match self {
            Self::MissingName => "name not defined",
            Self::NotImplemented(_) => "not implemented",
            Self::Io(_) | Self::Database(_) | Self::Metrics(_) => "internal server error",
        }
    }
}

impl IntoResponse for JournalError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() && status != StatusCode::NOT_IMPLEMENTED {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }
        (status, self.public_message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_their_status() {
        assert_eq!(
            JournalError::MissingName.status_code(),
            StatusCode::EXPECTATION_FAILED
        );
        assert_eq!(
            JournalError::NotImplemented("list").status_code(),
            StatusCode::NOT_IMPLEMENTED
        );
    }

    #[test]
    fn storage_faults_are_server_errors() {
        let err = JournalError::from(std::io::Error::other("disk full"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "internal server error");
    }

    #[test]
    fn into_response_keeps_status() {
        let response = JournalError::NotImplemented("list").into_response();
        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    }
}
