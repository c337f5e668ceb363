use crate::config::{AppConfig, ConfigValidator};
use crate::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "items-api",
    version,
    about = "Small HTTP item service with Prometheus request metrics"
)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", env = "ITEMS_API_CONFIG")]
    pub config: Option<PathBuf>,

    /// Server bind address (overrides the config file and `HOST`)
    #[arg(long)]
    pub host: Option<String>,

    /// Server port (overrides the config file and `PORT`)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Log level
    #[arg(short, long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,

    /// Enable JSON logging
    #[arg(long, env = "ITEMS_API_JSON_LOGS")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Load and validate the configuration, then print the effective values
    CheckConfig,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| PathBuf::from("config.yaml"))
    }

    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Serve)
    }

    /// Apply command-line overrides on top of a loaded config and re-validate.
    pub fn apply_overrides(&self, config: &mut AppConfig) -> Result<()> {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        ConfigValidator::validate(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_serve() {
        let cli = Cli::try_parse_from(["items-api"]).unwrap();
        assert_eq!(cli.command(), Commands::Serve);
        assert_eq!(cli.config_path(), PathBuf::from("config.yaml"));
    }

    #[test]
    fn test_overrides_win_over_config() {
        let cli =
            Cli::try_parse_from(["items-api", "--host", "127.0.0.1", "-p", "9000", "check-config"])
                .unwrap();
        assert_eq!(cli.command(), Commands::CheckConfig);

        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_bind_address_has_no_cli_env_variables() {
        let cli = Cli::try_parse_from(["items-api"]).unwrap();
        assert!(cli.host.is_none());
        assert!(cli.port.is_none());

        let args: Vec<_> = <Cli as clap::CommandFactory>::command()
            .get_arguments()
            .filter(|arg| matches!(arg.get_id().as_str(), "host" | "port"))
            .map(|arg| arg.get_env().is_none())
            .collect();
        assert_eq!(args, vec![true, true]);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let cli = Cli::try_parse_from(["items-api", "--port", "0"]).unwrap();
        let mut config = AppConfig::default();
        assert!(cli.apply_overrides(&mut config).is_err());
    }
}
