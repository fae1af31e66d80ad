//! Greeting endpoints and the shared wrong-method fallback.

use axum::extract::Path;
use axum::http::{Method, StatusCode, Uri};
use axum::response::IntoResponse;

/// `GET /hello` — Static hello page.
#[utoipa::path(
    get,
    path = "/hello",
    tag = "Greeting",
    summary = "Hello page",
    responses(
        (status = 200, description = "Greeting text", body = String),
        (status = 405, description = "Any method other than GET"),
    )
)]
pub async fn hello_page() -> impl IntoResponse {
    tracing::info!("display hello page");
    (StatusCode::OK, "Hello Page")
}

/// `GET /` — Greeting with an empty suffix.
#[utoipa::path(
    get,
    path = "/",
    tag = "Greeting",
    summary = "Root greeting",
    responses(
        (status = 200, description = "Always `Hello, !`", body = String),
    )
)]
pub async fn hello_root() -> String {
    greet("")
}

/// `GET /{suffix}` — Greets whatever follows the leading slash.
///
/// `GET /world` answers `Hello, world!`.
#[utoipa::path(
    get,
    path = "/{suffix}",
    tag = "Greeting",
    summary = "Echo greeting",
    params(
        ("suffix" = String, Path, description = "Anything after the leading slash"),
    ),
    responses(
        (status = 200, description = "Greeting text", body = String),
    )
)]
pub async fn hello_server(Path(suffix): Path<String>) -> String {
    greet(&suffix)
}

fn greet(suffix: &str) -> String {
    format!("Hello, {suffix}!")
}

/// Method fallback of the greeting wildcard: only GET greets, any other
/// method on an unknown path is a plain 404.
pub async fn not_found(method: Method, uri: Uri) -> StatusCode {
    tracing::debug!(%method, path = %uri.path(), "no route");
    StatusCode::NOT_FOUND
}

/// Method fallback for routes that exist but not for this method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> StatusCode {
    tracing::warn!(%method, path = %uri.path(), "client used wrong method");
    StatusCode::METHOD_NOT_ALLOWED
}
