//! access-journal server entry point.
//!
//! Builds the metrics registry and journal backend, then serves the Axum
//! router until the process is killed.

use anyhow::Context;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use access_journal::api;
use access_journal::app_state::AppState;
use access_journal::config::{JournalConfig, LogFormat};
use access_journal::metrics::HttpMetrics;
use access_journal::persistence::JournalStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = JournalConfig::from_env().context("invalid LISTEN_ADDR")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    tracing::info!(storage = %config.storage, addr = %config.listen_addr, "starting access-journal");

    let metrics = HttpMetrics::new().context("failed to register metrics")?;
    let journal = JournalStore::from_config(&config)
        .await
        .context("failed to open journal storage")?;
    if journal.is_none() {
        tracing::warn!(storage = %config.storage, "unknown STORAGE value; /user will not record anything");
    }

    let app = api::build_router(AppState::new(journal, metrics)).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
