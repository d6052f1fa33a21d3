//! PDF acquisition port interface

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

/// Errors while acquiring a remote PDF
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("URL does not point to a PDF: {url} (content type: {content_type})")]
    UnsupportedContentType { url: String, content_type: String },

    #[error("Failed to fetch {url}: {reason}")]
    RequestFailed { url: String, reason: String },

    #[error("Failed to fetch {url}: HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("PDF cache error: {0}")]
    Cache(String),
}

/// Port for turning a PDF URL into a local file
#[async_trait]
pub trait PdfFetcher: Send + Sync {
    /// Fetch the PDF at `url` and return a readable local path.
    ///
    /// Implementations may serve repeat requests from a local cache
    /// without touching the network.
    async fn fetch(&self, url: &str) -> Result<PathBuf, FetchError>;
}
