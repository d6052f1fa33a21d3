//! Credential port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::error::ConfigError;

/// Port for locating the API credential
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up the API key.
    ///
    /// # Returns
    /// `Ok(None)` when no source provides one; absence is not an error.
    async fn api_key(&self) -> Result<Option<String>, ConfigError>;

    /// Get the configuration file path.
    fn path(&self) -> PathBuf;
}
