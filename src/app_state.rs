//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::metrics::HttpMetrics;
use crate::persistence::JournalStore;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Journal backend; `None` when `STORAGE` named no known backend.
    pub journal: Option<JournalStore>,
    /// Process-wide HTTP metrics.
    pub metrics: Arc<HttpMetrics>,
}

impl AppState {
    /// Bundles the startup-built components.
    #[must_use]
    pub fn new(journal: Option<JournalStore>, metrics: Arc<HttpMetrics>) -> Self {
        Self { journal, metrics }
    }
}
