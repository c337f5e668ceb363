use crate::metrics::MetricsRegistry;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::{sync::Arc, time::Instant};
use tracing::debug;

/// Outermost interceptor: times the rest of the chain and records one
/// counter increment plus one latency sample per request.
///
/// Labels come from the raw request, so paths that hit the not-found
/// fallback get their own series too. The response is passed through as is.
pub async fn track_requests(
    State(metrics): State<Arc<MetricsRegistry>>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    let elapsed = start.elapsed();
    metrics.record_request(method.as_str(), &path, elapsed);
    debug!(
        http.method = %method,
        url.path = %path,
        http.response.duration = ?elapsed,
        "request recorded"
    );

    response
}
