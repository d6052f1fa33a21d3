//! Anthropic Messages API analyzer adapter

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ports::{AnalysisError, DocumentAnalyzer};
use crate::domain::analysis::{AnalysisRequest, AnalysisResult};
use crate::domain::model::TokenUsage;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "ANTHROPIC_BASE_URL";

/// API version header value
const API_VERSION: &str = "2023-06-01";

// Request types for the Messages API

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: Vec<ContentPart>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Document { source: DocumentSource },
    Text { text: String },
}

#[derive(Debug, Serialize)]
struct DocumentSource {
    #[serde(rename = "type")]
    kind: String,
    media_type: String,
    data: String,
}

// Response types for the Messages API

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ResponseBlock>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct ResponseBlock {
    #[serde(rename = "type")]
    kind: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    input_tokens: u64,
    output_tokens: u64,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(rename = "type")]
    kind: Option<String>,
    message: String,
}

/// Anthropic Messages API analyzer
pub struct AnthropicAnalyzer {
    api_key: Option<String>,
    base_url: String,
    client: reqwest::Client,
}

impl AnthropicAnalyzer {
    /// Create an analyzer against the default endpoint.
    ///
    /// A missing key is allowed; the service then rejects the request
    /// with an authentication error.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create an analyzer against a custom endpoint
    pub fn with_base_url(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Create an analyzer honouring `ANTHROPIC_BASE_URL` when set
    pub fn from_env(api_key: Option<String>) -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.is_empty() => Self::with_base_url(api_key, url),
            _ => Self::new(api_key),
        }
    }

    /// Build the API URL
    fn api_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }

    /// Build the request body: the document first, then the prompt
    fn build_request(request: &AnalysisRequest) -> MessagesRequest {
        let document = request.document();
        MessagesRequest {
            model: request.model().as_str().to_string(),
            max_tokens: request.max_tokens(),
            messages: vec![Message {
                role: "user".to_string(),
                content: vec![
                    ContentPart::Document {
                        source: DocumentSource {
                            kind: "base64".to_string(),
                            media_type: document.media_type().to_string(),
                            data: document.to_base64(),
                        },
                    },
                    ContentPart::Text {
                        text: request.prompt().content().to_string(),
                    },
                ],
            }],
        }
    }

    /// Extract text from response
    fn extract_text(response: &MessagesResponse) -> Option<String> {
        let parts: Vec<&str> = response
            .content
            .iter()
            .filter(|b| b.kind == "text")
            .filter_map(|b| b.text.as_deref())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(""))
        }
    }

    /// Turn an error body into a readable message
    fn error_message(body: &str) -> String {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(parsed) => match parsed.error.kind {
                Some(kind) => format!("{}: {}", kind, parsed.error.message),
                None => parsed.error.message,
            },
            Err(_) => body.to_string(),
        }
    }
}

#[async_trait]
impl DocumentAnalyzer for AnthropicAnalyzer {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        let url = self.api_url();
        let body = Self::build_request(request);
        debug!(url = %url, model = %body.model, "POST messages");

        let mut builder = self
            .client
            .post(&url)
            .header("anthropic-version", API_VERSION)
            .json(&body);
        if let Some(key) = &self.api_key {
            builder = builder.header("x-api-key", key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| AnalysisError::RequestFailed(e.to_string()))?;

        let status = response.status();

        // Handle HTTP errors
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AnalysisError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AnalysisError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AnalysisError::ApiError(format!(
                "HTTP {}: {}",
                status,
                Self::error_message(&error_text)
            )));
        }

        // Parse response
        let response: MessagesResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::ParseError(e.to_string()))?;

        let text = Self::extract_text(&response).ok_or(AnalysisError::EmptyResponse)?;
        let usage = response
            .usage
            .map(|u| TokenUsage::new(u.input_tokens, u.output_tokens))
            .unwrap_or_default();

        Ok(AnalysisResult { text, usage })
    }
}
