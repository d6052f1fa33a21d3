//! Where a PDF comes from: a local path or a remote URL

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};

/// New-style arXiv ids (2301.12345, 2301.12345v2) behind /abs/ or /pdf/
static RE_ARXIV_NEW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"arxiv\.org/(?:abs|pdf)/(\d{4}\.\d{4,5}(?:v\d+)?)").expect("valid regex")
});

/// Old-style arXiv ids (hep-th/9901001, math.GT/0309136v1)
static RE_ARXIV_OLD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"arxiv\.org/(?:abs|pdf)/([a-z\-]+(?:\.[A-Z]{2})?/\d{7}(?:v\d+)?)")
        .expect("valid regex")
});

/// A user-supplied PDF location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PdfSource {
    Url(String),
    Local(PathBuf),
}

impl PdfSource {
    /// Classify a path-or-URL string. Only `http://` and `https://` count as URLs.
    pub fn parse(input: &str) -> Self {
        if is_url(input) {
            Self::Url(input.to_string())
        } else {
            Self::Local(PathBuf::from(input))
        }
    }

    /// Whether this source needs a download
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }

    /// Stem used to name output files once the source resolves to `local`.
    ///
    /// URLs that carry an arXiv id use the id; everything else falls back to
    /// the stem of the resolved local file.
    pub fn suggested_stem(&self, local: &Path) -> String {
        if let Self::Url(url) = self {
            if let Some(id) = extract_arxiv_id(url) {
                return id.replace('/', "_");
            }
        }
        local
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "paper".to_string())
    }
}

/// Check if the input string looks like a URL
pub fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Content-addressed cache key: lowercase hex SHA-256 of the URL string
pub fn cache_key(url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Extract an arXiv identifier from an arxiv.org URL
pub fn extract_arxiv_id(url: &str) -> Option<String> {
    RE_ARXIV_NEW
        .captures(url)
        .or_else(|| RE_ARXIV_OLD.captures(url))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}
