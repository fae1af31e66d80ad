//! HTTP API layer: handlers, parameter DTOs, and router composition.

pub mod dto;
pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use utoipa::OpenApi;

use crate::app_state::AppState;
use crate::metrics::track_metrics;

/// OpenAPI description of the HTTP surface.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "access-journal",
        description = "Records named accesses to a file or SQLite journal."
    ),
    paths(
        handlers::greeting::hello_page,
        handlers::greeting::hello_root,
        handlers::greeting::hello_server,
        handlers::journal::log_access,
        handlers::system::metrics_handler,
    ),
    tags(
        (name = "Greeting", description = "Static and echo greetings"),
        (name = "Journal", description = "Access journal"),
        (name = "System", description = "Operational endpoints"),
    )
)]
pub struct ApiDoc;

/// Builds the complete application router.
///
/// Every route is wrapped by [`track_metrics`] through `route_layer`, so
/// only requests that matched a route are counted. The Swagger UI, when
/// enabled, is merged afterwards and stays uninstrumented.
pub fn build_router(state: AppState) -> Router {
    let metrics = Arc::clone(&state.metrics);
    let router = Router::new()
        .merge(handlers::routes())
        .route_layer(middleware::from_fn_with_state(metrics, track_metrics))
        .with_state(state);

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    router
}
