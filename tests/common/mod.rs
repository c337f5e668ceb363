//! Common test utilities and fixtures

#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use items_api::{build_app, config::AppConfig, AppState};
use std::sync::Arc;

/// Test configuration builder
pub struct TestConfigBuilder {
    config: AppConfig,
}

impl TestConfigBuilder {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.server.test_mode = true;
        Self { config }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.config.server.port = port;
        self
    }

    pub fn with_latency_buckets(mut self, buckets: &[f64]) -> Self {
        self.config.metrics.latency_buckets = buckets.to_vec();
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

impl Default for TestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Fully layered router plus its state, built from the default test config.
pub fn test_router() -> (Router, Arc<AppState>) {
    build_app(&TestConfigBuilder::new().build()).expect("Failed to build test app")
}

/// In-process test server plus the state whose registry it records into.
pub fn test_server() -> (TestServer, Arc<AppState>) {
    let (app, state) = test_router();
    let server = TestServer::new(app).expect("Failed to start test server");
    (server, state)
}

/// Sum of every sample line of `name` (any label set) in exposition text.
pub fn sum_series(text: &str, name: &str) -> f64 {
    text.lines()
        .filter(|line| !line.starts_with('#'))
        .filter(|line| {
            line.strip_prefix(name)
                .is_some_and(|rest| rest.starts_with('{') || rest.starts_with(' '))
        })
        .filter_map(|line| line.rsplit(' ').next()?.parse::<f64>().ok())
        .sum()
}

/// Value of the `http_requests_total` series whose labels contain all `needles`.
pub fn request_count(text: &str, needles: &[&str]) -> Option<f64> {
    text.lines()
        .filter(|line| line.starts_with("http_requests_total{"))
        .find(|line| needles.iter().all(|n| line.contains(n)))
        .and_then(|line| line.rsplit(' ').next()?.parse().ok())
}
