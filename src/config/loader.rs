// src/config/loader.rs

use crate::config::{AppConfig, ConfigValidator};
use crate::error::{AppError, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// Load configuration from file (if present) and environment variables
pub fn load_config(config_path: &Path) -> Result<AppConfig> {
    let mut config = if config_path.exists() {
        info!("Loading configuration from file: {}", config_path.display());
        load_from_file(config_path)?
    } else {
        info!("Configuration file not found, using defaults");
        AppConfig::default()
    };

    override_with_env(&mut config);

    ConfigValidator::validate(&config)?;

    debug!("Configuration loaded and validated successfully");
    Ok(config)
}

fn load_from_file(config_path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(config_path).map_err(|_| AppError::ConfigNotFound {
        path: config_path.display().to_string(),
    })?;

    // An empty file is a valid "all defaults" config
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }

    Ok(serde_yaml::from_str(&content)?)
}

fn override_with_env(config: &mut AppConfig) {
    if let Ok(host) = std::env::var("HOST") {
        info!("Overriding server host from environment variable: {}", host);
        config.server.host = host;
    }

    if let Ok(port_str) = std::env::var("PORT") {
        if let Ok(port) = port_str.parse::<u16>() {
            info!("Overriding server port from environment variable: {}", port);
            config.server.port = port;
        } else {
            warn!("Invalid PORT environment variable: {}", port_str);
        }
    }
}
