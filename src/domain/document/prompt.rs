//! Prompt template value object

/// A prompt loaded verbatim from a template file.
/// No substitution is performed; the file content is the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    name: String,
    content: String,
}

impl PromptTemplate {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// File name the prompt was loaded from
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the content
    pub fn into_content(self) -> String {
        self.content
    }
}
