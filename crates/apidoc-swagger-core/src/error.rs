//! Error types for reading converter inputs.

use thiserror::Error;

/// Errors that can occur while loading endpoints, project info or options.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Reading an input or config file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON input could not be parsed into the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML options file could not be parsed.
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}
