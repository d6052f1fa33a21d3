//! Markdown file output adapter

use std::path::Path;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::application::ports::{OutputError, OutputWriter};

/// Writes generated markdown straight to the filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownFileWriter;

impl MarkdownFileWriter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OutputWriter for MarkdownFileWriter {
    async fn write(&self, path: &Path, content: &str) -> Result<(), OutputError> {
        fs::write(path, content)
            .await
            .map_err(|e| OutputError::WriteFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        debug!(path = %path.display(), bytes = content.len(), "Wrote output");
        Ok(())
    }
}
