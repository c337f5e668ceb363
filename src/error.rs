// src/error.rs

use metrics_exporter_prometheus::BuildError;
use thiserror::Error;

/// Errors that can stop the service from starting or keep running.
///
/// Request-level failures (malformed item bodies, unknown routes) never reach
/// this type: axum's extractors and fallback answer them directly.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String, line: Option<usize> },

    #[error("Configuration validation failed: {message}")]
    ConfigValidation { message: String, field: Option<String> },

    #[error("Failed to build metrics recorder: {0}")]
    MetricsSetup(#[from] BuildError),

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Create a new configuration validation error
    pub fn config_validation(message: impl Into<String>, field: Option<impl Into<String>>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
            field: field.map(Into::into),
        }
    }

    /// Name of the offending config field, when the error is tied to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ConfigValidation { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::ConfigParse {
            line: err.location().map(|loc| loc.line()),
            message: err.to_string(),
        }
    }
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;
