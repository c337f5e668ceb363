// src/handlers/health.rs

use axum::Json;
use serde::Serialize;

/// Timestamp reported by `/health`. Fixed so the payload is identical on every call.
pub const HEALTH_TIMESTAMP: &str = "2024-01-01T00:00:00Z";

#[derive(Debug, Serialize, PartialEq)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: &'static str,
}

/// `GET /health`
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: HEALTH_TIMESTAMP,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_payload_is_fixed() {
        let Json(first) = health_check().await;
        let Json(second) = health_check().await;

        assert_eq!(first.status, "healthy");
        assert_eq!(first.timestamp, "2024-01-01T00:00:00Z");
        assert_eq!(first, second);
    }
}
