//! Configuration management for the Saree Business Management Platform
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with SBM_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Persistent store configuration
    pub storage: StorageConfig,

    /// Product catalog configuration
    pub catalog: CatalogConfig,

    /// Seed-data configuration
    pub seed: SeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding one JSON document per logical table
    pub data_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Fixed page size for list views
    pub page_size: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    /// Seed default products and clients into empty stores on startup
    pub load_defaults: bool,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("SBM_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("storage.data_dir", "data")?
            .set_default("catalog.page_size", 8)?
            .set_default("seed.load_defaults", true)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (SBM_ prefix)
            .add_source(
                Environment::with_prefix("SBM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { page_size: 8 }
    }
}
