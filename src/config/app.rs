//! Application configuration structures.

use std::collections::HashSet;
use std::net::IpAddr;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::store::{RawItem, default_items};

use super::validation::{ConfigError, expand_env_vars};

// =============================================================================
// Constants
// =============================================================================

/// Configuration file read when none is given explicitly.
pub const DEFAULT_CONFIG_PATH: &str = "configs/config.yaml";

/// Default directory served under `/static`.
pub const DEFAULT_STATIC_DIR: &str = "templates/static";

/// Default per-request timeout (10 seconds).
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// =============================================================================
// Server Configuration
// =============================================================================

/// Web server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server bind address (default: "0.0.0.0").
    pub bind: String,

    /// Server port (default: 8080).
    pub port: u16,

    /// Directory of static assets (default: "templates/static").
    pub static_dir: String,

    /// Per-request timeout (default: "10s").
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 8080,
            static_dir: DEFAULT_STATIC_DIR.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

// =============================================================================
// Catalog Configuration
// =============================================================================

/// Item catalog configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Items to serve. The built-in catalog is used when omitted.
    #[serde(default)]
    pub items: Option<Vec<RawItem>>,
}

// =============================================================================
// Application Configuration
// =============================================================================

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Web server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Item catalog configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file.
    ///
    /// `${VAR}` and `${VAR:-default}` references are expanded before parsing.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read, parsed, or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Parse and validate configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(&expand_env_vars(content))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(
                "Config file {} not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    ///
    /// Item contents are checked when the store is built; this only checks
    /// that catalog ids are unique.
    ///
    /// # Errors
    /// Returns `ConfigError::ValidationError` if any field is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Validate server bind address
        self.server.bind.parse::<IpAddr>().map_err(|_| {
            ConfigError::ValidationError(format!(
                "invalid server bind address: '{}'",
                self.server.bind
            ))
        })?;

        // Validate server port
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server port must be non-zero".to_string(),
            ));
        }

        if self.server.static_dir.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "server static_dir cannot be empty".to_string(),
            ));
        }

        if self.server.request_timeout.is_zero() {
            return Err(ConfigError::ValidationError(
                "server request_timeout must be positive".to_string(),
            ));
        }

        if let Some(items) = &self.catalog.items {
            if items.is_empty() {
                return Err(ConfigError::ValidationError(
                    "catalog items cannot be empty".to_string(),
                ));
            }
            let mut seen_ids = HashSet::new();
            for item in items {
                if !seen_ids.insert(item.id) {
                    return Err(ConfigError::ValidationError(format!(
                        "duplicate item id: {}",
                        item.id
                    )));
                }
            }
        }

        Ok(())
    }

    /// Items to load into the store.
    pub fn items(&self) -> Vec<RawItem> {
        self.catalog.items.clone().unwrap_or_else(default_items)
    }
}
