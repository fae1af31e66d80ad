//! Prometheus metrics: the registry and the middleware feeding it.

pub mod middleware;
pub mod registry;

pub use middleware::track_metrics;
pub use registry::HttpMetrics;
