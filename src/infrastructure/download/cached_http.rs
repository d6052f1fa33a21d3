//! HTTP PDF fetcher with a content-addressed on-disk cache

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::application::ports::{FetchError, PdfFetcher};
use crate::domain::document::{cache_key, PDF_MEDIA_TYPE};

/// Environment variable overriding the cache directory
pub const CACHE_DIR_ENV: &str = "NUTSHELL_CACHE_DIR";

/// Downloads PDFs once and serves later requests for the same URL from disk.
///
/// Cache entries are never revalidated or expired.
pub struct CachedHttpFetcher {
    cache_dir: PathBuf,
    client: reqwest::Client,
}

impl CachedHttpFetcher {
    /// Create a fetcher using `NUTSHELL_CACHE_DIR` or the per-user cache directory
    pub fn new() -> Self {
        if let Ok(dir) = std::env::var(CACHE_DIR_ENV) {
            if !dir.is_empty() {
                return Self::with_cache_dir(dir);
            }
        }
        let cache_dir = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("~/.cache"))
            .join("nutshell")
            .join("pdfs");
        Self::with_cache_dir(cache_dir)
    }

    /// Create with custom cache directory
    pub fn with_cache_dir(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Cache directory in use
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Where the PDF for `url` lives once downloaded
    pub fn cache_path(&self, url: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.pdf", cache_key(url)))
    }

    /// Accept a declared PDF content type, or any type when the URL path ends in `.pdf`
    fn looks_like_pdf(url: &str, content_type: Option<&str>) -> bool {
        let declared_pdf = content_type
            .map(|ct| ct.to_ascii_lowercase().contains(PDF_MEDIA_TYPE))
            .unwrap_or(false);
        declared_pdf || url_path_is_pdf(url)
    }

    /// HEAD the URL and make sure it points at a PDF
    async fn check_content_type(&self, url: &str) -> Result<(), FetchError> {
        let response = self
            .client
            .head(url)
            .send()
            .await
            .map_err(|e| request_failed(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok());
        debug!(url, content_type = ?content_type, "HEAD check");

        if Self::looks_like_pdf(url, content_type) {
            Ok(())
        } else {
            Err(FetchError::UnsupportedContentType {
                url: url.to_string(),
                content_type: content_type.unwrap_or("none").to_string(),
            })
        }
    }

    /// GET the body into a temp file inside the cache dir, then rename it into place
    async fn download(&self, url: &str, target: &Path) -> Result<(), FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| request_failed(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| request_failed(url, e))?;

        let mut tmp =
            NamedTempFile::new_in(&self.cache_dir).map_err(|e| FetchError::Cache(e.to_string()))?;
        tmp.write_all(&bytes)
            .map_err(|e| FetchError::Cache(e.to_string()))?;
        tmp.persist(target)
            .map_err(|e| FetchError::Cache(e.error.to_string()))?;

        info!(url, path = %target.display(), bytes = bytes.len(), "Downloaded PDF");
        Ok(())
    }
}

impl Default for CachedHttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PdfFetcher for CachedHttpFetcher {
    async fn fetch(&self, url: &str) -> Result<PathBuf, FetchError> {
        let target = self.cache_path(url);
        if target.is_file() {
            debug!(url, path = %target.display(), "Using cached PDF");
            return Ok(target);
        }

        tokio::fs::create_dir_all(&self.cache_dir)
            .await
            .map_err(|e| FetchError::Cache(e.to_string()))?;

        self.check_content_type(url).await?;
        self.download(url, &target).await?;
        Ok(target)
    }
}

fn request_failed(url: &str, err: reqwest::Error) -> FetchError {
    FetchError::RequestFailed {
        url: url.to_string(),
        reason: err.to_string(),
    }
}

fn url_path_is_pdf(url: &str) -> bool {
    reqwest::Url::parse(url)
        .map(|u| u.path().to_ascii_lowercase().ends_with(".pdf"))
        .unwrap_or(false)
}
