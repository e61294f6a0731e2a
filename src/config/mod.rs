//! Configuration module for the item browser.
//!
//! Provides YAML-based configuration loading and validation for:
//! - Server settings (bind address, port, static assets, request timeout)
//! - Catalog settings (item list; the built-in catalog when omitted)

mod app;
mod validation;

pub use app::{AppConfig, CatalogConfig, ServerConfig};
pub use validation::{ConfigError, expand_env_vars, parse_duration};

// Re-export constants
pub use app::{DEFAULT_CONFIG_PATH, DEFAULT_REQUEST_TIMEOUT, DEFAULT_STATIC_DIR};
