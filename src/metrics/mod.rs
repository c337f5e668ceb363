//! Request metrics: registry, timing middleware and Prometheus export.
//!
//! The registry wraps a local `PrometheusRecorder` instead of installing a
//! process-global recorder, so each `AppState` (and each test) owns an
//! independent set of series.

pub mod exporters;
pub mod middleware;

pub use exporters::{metrics_handler, PROMETHEUS_CONTENT_TYPE};
pub use middleware::track_requests;

use crate::config::MetricsConfig;
use crate::error::Result;
use metrics::{Histogram, Key, KeyName, Label, Level, Metadata, Recorder, SharedString};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle, PrometheusRecorder};
use std::time::Duration;

/// Counter of handled requests, labelled by `method` and `endpoint`.
pub const REQUESTS_TOTAL: &str = "http_requests_total";
/// Unlabelled latency histogram, in seconds.
pub const REQUEST_DURATION_SECONDS: &str = "http_request_duration_seconds";

static METADATA: Metadata<'static> =
    Metadata::new(module_path!(), Level::INFO, Some(module_path!()));

/// Process-lifetime metrics state shared by the middleware and `/metrics`.
///
/// All updates go through the recorder's atomic handles, so concurrent
/// requests can record without coordination. Rendering reads whatever has
/// been recorded at that moment.
pub struct MetricsRegistry {
    recorder: PrometheusRecorder,
    handle: PrometheusHandle,
    request_duration: Histogram,
}

impl MetricsRegistry {
    pub fn new(config: &MetricsConfig) -> Result<Self> {
        let recorder = PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Full(REQUEST_DURATION_SECONDS.to_string()),
                &config.latency_buckets,
            )?
            .build_recorder();
        let handle = recorder.handle();

        recorder.describe_counter(
            KeyName::from_const_str(REQUESTS_TOTAL),
            None,
            SharedString::const_str("Total HTTP requests"),
        );
        recorder.describe_histogram(
            KeyName::from_const_str(REQUEST_DURATION_SECONDS),
            None,
            SharedString::const_str("HTTP request latency"),
        );

        let request_duration =
            recorder.register_histogram(&Key::from_static_name(REQUEST_DURATION_SECONDS), &METADATA);

        tracing::info!(
            metrics.buckets = config.latency_buckets.len(),
            "Metrics registry initialized"
        );

        Ok(Self {
            recorder,
            handle,
            request_duration,
        })
    }

    /// Count one request for `(method, endpoint)` and observe its latency.
    pub fn record_request(&self, method: &str, endpoint: &str, duration: Duration) {
        let labels = vec![
            Label::new("method", method.to_owned()),
            Label::new("endpoint", endpoint.to_owned()),
        ];
        self.recorder
            .register_counter(&Key::from_parts(REQUESTS_TOTAL, labels), &METADATA)
            .increment(1);
        self.request_duration.record(duration.as_secs_f64());
    }

    /// Current state in the Prometheus text exposition format.
    pub fn render(&self) -> String {
        self.handle.render()
    }
}
