//! CellHub server — church cell-group management.
//!
//! Entry point that loads configuration, initializes logging, selects the
//! backend implementation, and starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use cellhub_api::AppState;
use cellhub_backend::Backend;
use cellhub_core::config::AppConfig;
use cellhub_core::result::AppResult;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> AppResult<AppConfig> {
    let config_path =
        std::env::var("CELLHUB_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());

    AppConfig::load(&config_path)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn run(config: AppConfig) -> AppResult<()> {
    tracing::info!("Starting CellHub v{}", env!("CARGO_PKG_VERSION"));

    let backend = Backend::from_config(&config.backend)?;
    let state = AppState::new(config, backend);

    cellhub_api::serve(state).await
}
