//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TRIP_ACCORD_` prefix and nested values use underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use trip_accord::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod detection;
mod error;
mod planner;
mod server;
mod storage;

pub use detection::DetectionConfig;
pub use error::{ConfigError, ValidationError};
pub use planner::{PlannerConfig, PlannerProvider};
pub use server::{Environment, ServerConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the Trip Accord service.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Trip storage configuration (memory or JSON files)
    #[serde(default)]
    pub storage: StorageConfig,

    /// Plan generator configuration (Anthropic or mock)
    #[serde(default)]
    pub planner: PlannerConfig,

    /// Conflict detection thresholds
    #[serde(default)]
    pub detection: DetectionConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TRIP_ACCORD` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TRIP_ACCORD__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `TRIP_ACCORD__STORAGE__BACKEND=memory` -> `storage.backend = memory`
    /// - `TRIP_ACCORD__PLANNER__ANTHROPIC_API_KEY=...` -> `planner.anthropic_api_key = ...`
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
                    .prefix("TRIP_ACCORD")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Performs semantic validation of configuration:
    /// - Port and timeout ranges
    /// - Storage directory presence for the file backend
    /// - API key presence for the Anthropic planner
    /// - Detection threshold consistency
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.storage.validate()?;
        self.planner.validate()?;
        self.detection.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
