//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `THEOLINGUA` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use theolingua::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod backend;
mod database;
mod error;
mod forms;
mod payment;
mod server;
mod upload;

pub use backend::BackendConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use forms::FormsConfig;
pub use payment::PaymentConfig;
pub use server::{Environment, ServerConfig};
pub use upload::UploadConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults; only `database` is optional.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// REST backend the controllers talk to
    #[serde(default)]
    pub backend: BackendConfig,

    /// Combo checkout settings
    #[serde(default)]
    pub payment: PaymentConfig,

    /// Upload widget and file manager
    #[serde(default)]
    pub upload: UploadConfig,

    /// Lead relay
    #[serde(default)]
    pub forms: FormsConfig,

    /// PostgreSQL for the local lead copy; in-memory when absent
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `THEOLINGUA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `THEOLINGUA__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `THEOLINGUA__FORMS__RELAY_URL=...` -> `forms.relay_url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("THEOLINGUA")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` naming the first invalid value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.backend.validate()?;
        self.payment.validate()?;
        self.upload.validate()?;
        self.forms.validate()?;
        if let Some(database) = &self.database {
            database.validate()?;
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
