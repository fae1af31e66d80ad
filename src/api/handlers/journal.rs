//! The journal route: record or list accesses by name.

use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::api::dto::{FormName, NameParams};
use crate::app_state::AppState;
use crate::domain::AccessRecord;
use crate::error::JournalError;

/// `GET|POST /user` — Journal an access, or list a name's accesses.
///
/// POST stores `(name, now)` in the active backend. GET returns the stored
/// timestamps one per line, which only the SQLite backend supports.
///
/// # Errors
///
/// Returns [`JournalError::MissingName`] for a POST without a name,
/// [`JournalError::NotImplemented`] for a GET on the file backend, and
/// storage errors as 500.
#[utoipa::path(
    method(get, post),
    path = "/user",
    tag = "Journal",
    summary = "Record or list accesses",
    params(NameParams),
    request_body(
        content = NameParams,
        content_type = "application/x-www-form-urlencoded",
        description = "POST form; `multipart/form-data` is accepted as well",
    ),
    responses(
        (status = 200, description = "Access recorded, or timestamps joined by newlines", body = String),
        (status = 417, description = "POST without a name", body = String),
        (status = 500, description = "Storage failure", body = String),
        (status = 501, description = "Listing is not supported by the file backend", body = String),
    )
)]
pub async fn log_access(
    State(state): State<AppState>,
    method: Method,
    FormName(name): FormName,
) -> Result<Response, JournalError> {
    let Some(store) = state.journal.as_ref() else {
        tracing::warn!("journal disabled by STORAGE setting; request ignored");
        return Ok(StatusCode::OK.into_response());
    };

    match method {
        Method::POST => {
            let record = AccessRecord::now(name)?;
            store.append(&record).await?;
            tracing::info!(name = %record.name(), backend = store.kind(), "added to journal");
            Ok(StatusCode::OK.into_response())
        }
        Method::GET => {
            let timestamps = store.list(&name).await?;
            tracing::info!(%name, entries = timestamps.len(), "showing journal");
            Ok((StatusCode::OK, timestamps.join("\n")).into_response())
        }
        _ => Err(JournalError::NotImplemented("this method")),
    }
}
