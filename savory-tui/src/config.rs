//! Application configuration.

use savory_core::{Catalog, CatalogError};

/// Runtime configuration for the reservation terminal.
///
/// # Environment variables
///
/// Every item can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | SAVORY_LOG_DIR | ./logs | Directory for the daily log files |
/// | SAVORY_LOG_LEVEL | info | Tracing filter (level or directives) |
/// | SAVORY_TABLES | (embedded seed) | Path to a floor-plan JSON override |
///
/// # Example
///
/// ```ignore
/// SAVORY_LOG_LEVEL=debug SAVORY_TABLES=./floor.json cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the rolling log files are written to
    pub log_dir: String,
    /// Tracing filter, a plain level or a full directive string
    pub log_level: String,
    /// Optional floor-plan JSON replacing the embedded seed
    pub tables_path: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, with defaults for
    /// anything unset.
    pub fn from_env() -> Self {
        Self {
            log_dir: std::env::var("SAVORY_LOG_DIR").unwrap_or_else(|_| "./logs".into()),
            log_level: std::env::var("SAVORY_LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            tables_path: std::env::var("SAVORY_TABLES").ok(),
        }
    }

    /// Load the table catalog: the override file when configured, the
    /// embedded seed otherwise.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.tables_path {
            Some(path) => Catalog::from_file(path),
            None => Catalog::builtin(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
