//! Request and result of a single document analysis

use crate::domain::document::{PdfData, PromptTemplate};
use crate::domain::model::{ModelId, TokenUsage};

use super::mode::ProcessingMode;

/// Everything the service needs for one document analysis.
/// Built once per invocation and dropped after submission.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    document: PdfData,
    prompt: PromptTemplate,
    model: ModelId,
    max_tokens: u32,
}

impl AnalysisRequest {
    /// Build a request whose token ceiling follows the processing mode
    pub fn new(
        document: PdfData,
        prompt: PromptTemplate,
        model: ModelId,
        mode: ProcessingMode,
    ) -> Self {
        Self {
            document,
            prompt,
            model,
            max_tokens: mode.max_tokens(),
        }
    }

    pub fn document(&self) -> &PdfData {
        &self.document
    }

    pub fn prompt(&self) -> &PromptTemplate {
        &self.prompt
    }

    pub fn model(&self) -> &ModelId {
        &self.model
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }
}

/// Text and token usage returned by the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub text: String,
    pub usage: TokenUsage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceiling_follows_mode() {
        let build = |mode| {
            AnalysisRequest::new(
                PdfData::new(vec![1, 2, 3]),
                PromptTemplate::new("p.txt", "Summarize."),
                ModelId::default(),
                mode,
            )
        };
        assert_eq!(build(ProcessingMode::Summarize).max_tokens(), 4096);
        assert_eq!(build(ProcessingMode::Transcribe).max_tokens(), 16384);
    }
}
