//! Domain error types

use thiserror::Error;

/// Error when configuration cannot be read
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {reason}")]
    ReadError { path: String, reason: String },
}
