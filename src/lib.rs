// src/lib.rs

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod state;

use crate::config::ServerConfig;
use crate::handlers::{create_item, health_check, list_items};
use crate::metrics::MetricsRegistry;
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::info;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use state::AppState;

/// Routes only, without the interceptor chain.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/items", get(list_items).post(create_item))
        .route("/metrics", get(metrics::metrics_handler))
        .with_state(state)
}

/// Wraps `router` in the interceptor chain, innermost first:
/// panic recovery, request tracing, then request metrics as the outermost
/// layer so it times everything else (including the not-found fallback).
pub fn apply_middleware(router: Router, metrics: Arc<MetricsRegistry>) -> Router {
    router
        .layer(CatchPanicLayer::new())
        .layer(axum::middleware::from_fn(middleware::trace_requests))
        .layer(axum::middleware::from_fn_with_state(
            metrics,
            metrics::track_requests,
        ))
}

/// Builds the shared state and the fully layered application router.
pub fn build_app(config: &AppConfig) -> Result<(Router, Arc<AppState>)> {
    let state = Arc::new(AppState::new(config)?);
    let app = apply_middleware(create_router(state.clone()), state.metrics.clone());

    info!(
        server.host = %config.server.host,
        server.port = config.server.port,
        metrics.buckets = ?config.metrics.latency_buckets,
        "Application configured"
    );

    Ok((app, state))
}

/// Binds `host:port`, letting tokio resolve host names off the runtime threads.
pub async fn bind_listener(server: &ServerConfig) -> Result<TcpListener> {
    let listener = TcpListener::bind((server.host.as_str(), server.port)).await?;
    info!(server.address = ?listener.local_addr()?, "Listener bound");
    Ok(listener)
}
