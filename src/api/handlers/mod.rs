//! HTTP endpoint handlers.

pub mod greeting;
pub mod journal;
pub mod system;

use axum::Router;
use axum::routing::get;

use crate::app_state::AppState;

/// Composes every instrumented route.
///
/// Known paths answer 405 for unsupported methods. Non-GET requests that
/// only hit the greeting wildcard answer 404.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/hello",
            get(greeting::hello_page).fallback(greeting::method_not_allowed),
        )
        .route(
            "/user",
            get(journal::log_access)
                .post(journal::log_access)
                .fallback(greeting::method_not_allowed),
        )
        .route(
            "/metrics",
            get(system::metrics_handler).fallback(greeting::method_not_allowed),
        )
        .route(
            "/",
            get(greeting::hello_root).fallback(greeting::method_not_allowed),
        )
        .route(
            "/{*suffix}",
            get(greeting::hello_server).fallback(greeting::not_found),
        )
}
