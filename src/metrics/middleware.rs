//! Request instrumentation middleware.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{MatchedPath, Request, State};
use axum::middleware::Next;
use axum::response::Response;

use super::HttpMetrics;

/// Times the wrapped handler and records its outcome.
///
/// Must be installed with `Router::route_layer` so that [`MatchedPath`] is
/// present: requests are labelled by route template (`/{*suffix}`), not by
/// the raw URI, and unmatched requests never reach this function.
pub async fn track_metrics(
    State(metrics): State<Arc<HttpMetrics>>,
    req: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| req.uri().path().to_string(), |p| p.as_str().to_string());

    let response = next.run(req).await;

    let status = response.status().as_u16();
    metrics.observe(&path, &method, status, start.elapsed().as_secs_f64());
    tracing::trace!(%path, %method, status, "request observed");

    response
}
