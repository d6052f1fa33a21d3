//! Output port interface

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

/// Output errors
#[derive(Debug, Clone, Error)]
pub enum OutputError {
    #[error("Failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },
}

/// Port for persisting generated markdown
#[async_trait]
pub trait OutputWriter: Send + Sync {
    /// Write `content` to `path`, replacing any existing file
    async fn write(&self, path: &Path, content: &str) -> Result<(), OutputError>;
}
