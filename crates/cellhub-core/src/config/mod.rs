//! Application configuration schemas.
//!
//! All configuration structs are deserialized from an optional TOML file
//! plus `CELLHUB__*` environment overrides via the `config` crate. Each
//! sub-module represents a logical configuration section.

pub mod backend;
pub mod logging;
pub mod server;

use serde::{Deserialize, Serialize};

use self::backend::BackendConfig;
use self::logging::LoggingConfig;
use self::server::ServerConfig;

use crate::result::AppResult;

/// Root application configuration.
///
/// Every section carries serde defaults, so the application starts with an
/// empty configuration file (and falls back to the inert backend when the
/// connection parameters are absent).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// External backend (auth + data store) connection settings.
    #[serde(default)]
    pub backend: BackendConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file (if present) merged with
    /// `CELLHUB__*` environment variables.
    pub fn load(path: &str) -> AppResult<Self> {
        let mut builder = config::Config::builder();

        if std::path::Path::new(path).exists() {
            builder = builder.add_source(config::File::with_name(path));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("CELLHUB")
                .separator("__")
                .try_parsing(true),
        );

        let mut app_config: AppConfig = builder.build()?.try_deserialize()?;
        app_config.backend.apply_env_fallback();
        Ok(app_config)
    }
}
