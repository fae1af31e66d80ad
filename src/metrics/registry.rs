//! Prometheus registry holding the per-route HTTP metrics.

use std::fmt;
use std::sync::Arc;

use prometheus::{CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder};

use crate::error::JournalError;

/// HTTP request metrics for the whole process.
///
/// Built once in `main` before the router starts and shared through
/// [`AppState`](crate::app_state::AppState). Never torn down; values reset
/// only when the process restarts.
pub struct HttpMetrics {
    registry: Registry,

    /// Requests by status code, route template and method.
    pub requests_total: CounterVec,
    /// Responses by status code.
    pub response_status: CounterVec,
    /// Handler latency in seconds by route template.
    pub response_time_seconds: HistogramVec,
}

impl HttpMetrics {
    /// Creates and registers all HTTP metrics in a fresh registry.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::Metrics`] if a metric definition is invalid
    /// or registered twice.
    pub fn new() -> Result<Arc<Self>, JournalError> {
        let registry = Registry::new();

        let requests_total = CounterVec::new(
            Opts::new("http_requests_total", "Number of HTTP requests."),
            &["code", "path", "method"],
        )?;
        registry.register(Box::new(requests_total.clone()))?;

        let response_status = CounterVec::new(
            Opts::new("response_status", "Status of HTTP response"),
            &["status"],
        )?;
        registry.register(Box::new(response_status.clone()))?;

        let response_time_seconds = HistogramVec::new(
            HistogramOpts::new("http_response_time_seconds", "Duration of HTTP requests."),
            &["path"],
        )?;
        registry.register(Box::new(response_time_seconds.clone()))?;

        // process_* CPU, memory and fd gauges; procfs only exists on Linux.
        #[cfg(target_os = "linux")]
        registry.register(Box::new(prometheus::process_collector::ProcessCollector::for_self()))?;

        Ok(Arc::new(Self {
            registry,
            requests_total,
            response_status,
            response_time_seconds,
        }))
    }

    /// Records one finished request.
    pub fn observe(&self, path: &str, method: &str, status: u16, elapsed_secs: f64) {
        let code = status.to_string();
        self.requests_total
            .with_label_values(&[code.as_str(), path, method])
            .inc();
        self.response_status
            .with_label_values(&[code.as_str()])
            .inc();
        self.response_time_seconds
            .with_label_values(&[path])
            .observe(elapsed_secs);
    }

    /// Content type of [`HttpMetrics::render`] output.
    #[must_use]
    pub fn content_type(&self) -> String {
        TextEncoder::new().format_type().to_string()
    }

    /// Encodes every registered metric in the text exposition format.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::Metrics`] if encoding fails.
    pub fn render(&self) -> Result<String, JournalError> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

impl fmt::Debug for HttpMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpMetrics").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn observe_updates_all_three_metrics() {
        let Ok(metrics) = HttpMetrics::new() else {
            panic!("metrics registry");
        };
        metrics.observe("/hello", "GET", 200, 0.01);
        metrics.observe("/hello", "POST", 405, 0.001);
        metrics.observe("/hello", "GET", 200, 0.02);

        assert!(
            (metrics
                .requests_total
                .with_label_values(&["200", "/hello", "GET"])
                .get()
                - 2.0)
                .abs()
                < f64::EPSILON
        );
        assert!(
            (metrics.response_status.with_label_values(&["405"]).get() - 1.0).abs()
                < f64::EPSILON
        );
        assert_eq!(
            metrics
                .response_time_seconds
                .with_label_values(&["/hello"])
                .get_sample_count(),
            3
        );
    }

    #[test]
    fn render_contains_registered_names() {
        let Ok(metrics) = HttpMetrics::new() else {
            panic!("metrics registry");
        };
        metrics.observe("/user", "POST", 417, 0.005);
        let Ok(text) = metrics.render() else {
            panic!("render failed");
        };
        assert!(text.contains(r#"response_status{status="417"} 1"#));
        assert!(text.contains("http_requests_total"));
        assert!(text.contains("http_response_time_seconds_bucket"));
    }

    #[test]
    fn registries_are_independent() {
        let (Ok(a), Ok(b)) = (HttpMetrics::new(), HttpMetrics::new()) else {
            panic!("metrics registry");
        };
        a.observe("/", "GET", 200, 0.0);
        assert!(b.response_status.with_label_values(&["200"]).get().abs() < f64::EPSILON);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn render_includes_process_metrics() {
        let Ok(metrics) = HttpMetrics::new() else {
            panic!("metrics registry");
        };
        let Ok(text) = metrics.render() else {
            panic!("render failed");
        };
        assert!(text.contains("process_cpu_seconds_total"), "{text}");
    }

    #[test]
    fn content_type_is_text_format() {
        let Ok(metrics) = HttpMetrics::new() else {
            panic!("metrics registry");
        };
        assert!(metrics.content_type().starts_with("text/plain"));
    }
}
