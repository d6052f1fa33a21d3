//! Prompt directory store adapter

use std::env;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::application::ports::{PromptError, PromptStore};
use crate::domain::document::PromptTemplate;

/// Environment variable pointing at an alternate prompts directory
pub const PROMPTS_DIR_ENV: &str = "NUTSHELL_PROMPTS_DIR";

/// Directory name shipped next to the binary
const PROMPTS_DIR_NAME: &str = "Prompts";

/// Loads prompt templates verbatim from a directory
pub struct PromptDirStore {
    dir: PathBuf,
}

impl PromptDirStore {
    /// Locate the prompts directory.
    ///
    /// `NUTSHELL_PROMPTS_DIR` wins when set. Otherwise `Prompts/` beside the
    /// executable, falling back to the one in the source tree.
    pub fn new() -> Self {
        if let Ok(dir) = env::var(PROMPTS_DIR_ENV) {
            if !dir.is_empty() {
                return Self::with_dir(dir);
            }
        }

        let beside_exe = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|p| p.join(PROMPTS_DIR_NAME)))
            .filter(|p| p.is_dir());

        let dir = beside_exe
            .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join(PROMPTS_DIR_NAME));
        Self::with_dir(dir)
    }

    /// Create with custom directory
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory prompts are read from
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Default for PromptDirStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PromptStore for PromptDirStore {
    async fn load(&self, name: &str) -> Result<PromptTemplate, PromptError> {
        let path = self.dir.join(name);
        debug!(path = %path.display(), "Loading prompt");

        match fs::read_to_string(&path).await {
            Ok(content) => Ok(PromptTemplate::new(name, content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(PromptError::NotFound { path }),
            Err(e) => Err(PromptError::ReadFailed {
                path,
                reason: e.to_string(),
            }),
        }
    }
}
