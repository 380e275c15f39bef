//! Common error types for the scrobbler crates

use thiserror::Error;

/// Common result type for scrobbler operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the scrobbler crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed TOML configuration
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Malformed record JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Record is not a field-name to value mapping
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}
