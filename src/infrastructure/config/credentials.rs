//! Environment / dotfile credential store adapter

use std::env;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::application::ports::CredentialStore;
use crate::domain::error::ConfigError;

/// Environment variable and config-file key holding the API key
pub const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";

/// Reads the API key from the environment, then from a `KEY=value` file
pub struct EnvFileCredentialStore {
    var: String,
    path: PathBuf,
}

impl EnvFileCredentialStore {
    /// Create a store with the default variable and XDG config path
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("nutshell");

        Self {
            var: API_KEY_VAR.to_string(),
            path: config_dir.join("config"),
        }
    }

    /// Create with custom variable name and file path
    pub fn with_path(var: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            var: var.into(),
            path: path.into(),
        }
    }

    /// Return the value of the first `key=value` line matching `key`.
    ///
    /// Blank lines and `#` comments are skipped, a leading `export ` is
    /// ignored and one pair of surrounding quotes is removed.
    fn scan_assignment(content: &str, key: &str) -> Option<String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| {
                let line = line.strip_prefix("export ").unwrap_or(line);
                let (k, v) = line.split_once('=')?;
                (k.trim() == key).then(|| unquote(v.trim()).to_string())
            })
            .find(|v| !v.is_empty())
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

impl Default for EnvFileCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for EnvFileCredentialStore {
    async fn api_key(&self) -> Result<Option<String>, ConfigError> {
        // Check environment first
        if let Ok(key) = env::var(&self.var) {
            if !key.is_empty() {
                debug!(var = %self.var, "API key taken from environment");
                return Ok(Some(key));
            }
        }

        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ConfigError::ReadError {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        let key = Self::scan_assignment(&content, &self.var);
        if key.is_some() {
            debug!(path = %self.path.display(), "API key taken from config file");
        }
        Ok(key)
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }
}
