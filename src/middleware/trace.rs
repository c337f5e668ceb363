// src/middleware/trace.rs

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

/// Opens a `request` span with a fresh request id and logs how the request
/// finished. Logging only: the response is returned untouched.
pub async fn trace_requests(mut req: Request<Body>, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let start_time = Instant::now();

    let span = info_span!(
        "request",
        request_id = %request_id,
        http.method = %req.method(),
        url.path = %req.uri().path(),
    );

    // Handlers can pick the id up from extensions if they need to log it
    req.extensions_mut().insert(request_id);

    async move {
        let response = next.run(req).await;
        info!(
            http.response.duration = ?start_time.elapsed(),
            http.status_code = response.status().as_u16(),
            "Finished processing request"
        );
        response
    }
    .instrument(span)
    .await
}
