// src/state.rs

use crate::config::AppConfig;
use crate::error::Result;
use crate::metrics::MetricsRegistry;
use std::sync::Arc;
use tracing::info;

/// Shared application state handed to the Axum handlers.
pub struct AppState {
    pub metrics: Arc<MetricsRegistry>,
}

impl AppState {
    /// Builds the state, including a fresh metrics registry.
    /// Fails only if the configured latency buckets are rejected by the recorder.
    pub fn new(config: &AppConfig) -> Result<Self> {
        info!("Creating shared AppState");
        let metrics = Arc::new(MetricsRegistry::new(&config.metrics)?);
        Ok(Self { metrics })
    }
}
