//! Prompt template port interface

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::document::PromptTemplate;

/// Prompt loading errors
#[derive(Debug, Clone, Error)]
pub enum PromptError {
    #[error("Prompt file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read prompt file {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },
}

/// Port for loading prompt templates by file name
#[async_trait]
pub trait PromptStore: Send + Sync {
    /// Load the template stored under `name`
    async fn load(&self, name: &str) -> Result<PromptTemplate, PromptError>;
}
