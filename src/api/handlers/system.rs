//! System endpoints: Prometheus exposition.

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use crate::app_state::AppState;
use crate::error::JournalError;

/// `GET /metrics` — Current metrics in the Prometheus text format.
///
/// # Errors
///
/// Returns [`JournalError::Metrics`] if encoding fails.
#[utoipa::path(
    get,
    path = "/metrics",
    tag = "System",
    summary = "Prometheus metrics",
    description = "Request counters and latency histograms since process start.",
    responses(
        (status = 200, description = "Text exposition format", body = String, content_type = "text/plain"),
    )
)]
pub async fn metrics_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, JournalError> {
    let body = state.metrics.render()?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, state.metrics.content_type())],
        body,
    ))
}
