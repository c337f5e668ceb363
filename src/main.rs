// src/main.rs

use axum::serve;
use items_api::{
    bind_listener, build_app,
    cli::{Cli, Commands},
    config, AppConfig, AppError,
};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = ?e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = ?e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => { info!(signal = "Ctrl+C", "Received signal. Initiating graceful shutdown...") },
        () = terminate => { info!(signal = "Terminate", "Received signal. Initiating graceful shutdown...") },
    }
}

fn init_tracing(cli: &Cli) {
    let env_filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    if cli.json_logs {
        registry
            .with(fmt::layer().json().with_current_span(true).with_span_list(true))
            .init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

fn load_configuration(cli: &Cli) -> Result<AppConfig, AppError> {
    let config_path = cli.config_path();
    let mut app_config = config::load_config(&config_path).map_err(|e| {
        error!(
            config.path = %config_path.display(),
            error = ?e,
            "Failed to load or validate configuration. Exiting."
        );
        e
    })?;
    cli.apply_overrides(&mut app_config)?;
    Ok(app_config)
}

async fn run_server(app_config: AppConfig) -> Result<(), AppError> {
    let (app, _state) = build_app(&app_config)?;

    let listener = bind_listener(&app_config.server).await.map_err(|e| {
        error!(
            server.host = %app_config.server.host,
            server.port = app_config.server.port,
            error = ?e,
            "Failed to bind to address. Exiting."
        );
        e
    })?;
    info!("Server listening");

    serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!(error = ?e, "Server run loop encountered an error. Exiting.");
            AppError::from(e)
        })?;

    info!("Server shut down gracefully.");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse_args();
    init_tracing(&cli);

    let app_config = load_configuration(&cli)?;

    match cli.command() {
        Commands::CheckConfig => {
            let yaml = serde_yaml::to_string(&app_config).map_err(|e| AppError::Serialization {
                message: format!("Failed to serialize config: {}", e),
            })?;
            info!("Configuration is valid");
            println!("{yaml}");
            Ok(())
        }
        Commands::Serve => run_server(app_config).await,
    }
}
