//! Document analysis port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::analysis::{AnalysisRequest, AnalysisResult};

/// Errors from the remote analysis service
#[derive(Debug, Clone, Error)]
pub enum AnalysisError {
    #[error("Invalid or missing API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Empty response from API")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Port for sending a document and prompt to a language model
#[async_trait]
pub trait DocumentAnalyzer: Send + Sync {
    /// Submit a single-turn request and return the model's text and usage.
    ///
    /// Errors are returned as-is; no retry is attempted.
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError>;
}
