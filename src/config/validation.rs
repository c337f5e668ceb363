// src/config/validation.rs

use crate::config::AppConfig;
use crate::error::{AppError, Result};
use tracing::{debug, warn};

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(config: &AppConfig) -> Result<()> {
        debug!("Starting configuration validation");

        if let Err(e) = Self::validate_server_config(config) {
            warn!("Server config validation failed: {}", e);
            return Err(e);
        }
        debug!("Server config validation passed");

        if let Err(e) = Self::validate_metrics_config(config) {
            warn!("Metrics config validation failed: {}", e);
            return Err(e);
        }
        debug!("Metrics config validation passed");

        Ok(())
    }

    fn validate_server_config(config: &AppConfig) -> Result<()> {
        if config.server.host.trim().is_empty() {
            return Err(AppError::config_validation(
                "Server host cannot be empty",
                Some("server.host"),
            ));
        }

        // Allow port 0 in test mode (system will assign a free port)
        if config.server.port == 0 && !config.server.test_mode {
            return Err(AppError::config_validation(
                "Server port cannot be 0 (except in test mode)",
                Some("server.port"),
            ));
        }

        Ok(())
    }

    fn validate_metrics_config(config: &AppConfig) -> Result<()> {
        let buckets = &config.metrics.latency_buckets;

        if buckets.is_empty() {
            return Err(AppError::config_validation(
                "At least one latency bucket must be configured",
                Some("metrics.latency_buckets"),
            ));
        }

        if let Some(bad) = buckets.iter().find(|b| !b.is_finite() || **b <= 0.0) {
            return Err(AppError::config_validation(
                format!("Latency bucket bounds must be positive and finite, got {}", bad),
                Some("metrics.latency_buckets"),
            ));
        }

        if buckets.windows(2).any(|w| w[0] >= w[1]) {
            return Err(AppError::config_validation(
                "Latency buckets must be strictly increasing",
                Some("metrics.latency_buckets"),
            ));
        }

        Ok(())
    }
}
