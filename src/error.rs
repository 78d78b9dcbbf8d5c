//! Error types for mkm_inventory

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for mkm_inventory operations
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Configuration document could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Configuration document is not valid YAML or has the wrong shape
    #[error("Failed to parse {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    /// Configuration is well-formed but semantically invalid
    #[error("Configuration error: {0}")]
    Config(String),
    /// Inventory language has no entry in the API reference table
    #[error("Configuration error: no language ID configured for '{0}'")]
    UnknownLanguage(String),
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Marketplace rejected the credentials
    #[error("Credentials rejected by Cardmarket: {0}")]
    Unauthorized(reqwest::StatusCode),
    /// Request quota used up; later lookups would all come back empty
    #[error("Cardmarket request limit reached: {0}")]
    RateLimited(reqwest::StatusCode),
    /// HTTP error status code
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
    /// Report could not be written to the console
    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

/// Result alias for mkm_inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;
