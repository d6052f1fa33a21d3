//! Processing mode value object

use std::fmt;

/// Output-token ceiling for summaries
pub const SUMMARY_MAX_TOKENS: u32 = 4096;

/// Output-token ceiling for full transcriptions
pub const TRANSCRIPTION_MAX_TOKENS: u32 = 16384;

/// Comment prepended to every transcription file
pub const TRANSCRIPTION_DISCLAIMER: &str = "<!-- This is an AI-generated transcript of a PDF. Certain elements of the original document, such as figures and images, have been replaced with descriptions. -->";

/// What to ask the model for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessingMode {
    Summarize,
    Transcribe,
}

impl ProcessingMode {
    /// Maximum output tokens requested from the service
    pub const fn max_tokens(&self) -> u32 {
        match self {
            Self::Summarize => SUMMARY_MAX_TOKENS,
            Self::Transcribe => TRANSCRIPTION_MAX_TOKENS,
        }
    }

    /// Prompt file used when none is given
    pub const fn default_prompt_file(&self) -> &'static str {
        match self {
            Self::Summarize => "v2_no_scratchpad.txt",
            Self::Transcribe => "transcribe_v1.txt",
        }
    }

    /// Suffix appended to the output file stem
    pub const fn output_suffix(&self) -> &'static str {
        match self {
            Self::Summarize => "summary",
            Self::Transcribe => "transcription",
        }
    }

    /// Human-readable noun for status lines
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Summarize => "Summary",
            Self::Transcribe => "Transcription",
        }
    }

    /// Default output file name for a given stem
    pub fn output_file_name(&self, stem: &str) -> String {
        format!("{}_{}.md", stem, self.output_suffix())
    }

    /// Final file content for a model response
    pub fn render(&self, text: &str) -> String {
        match self {
            Self::Summarize => text.to_string(),
            Self::Transcribe => format!("{}\n\n{}", TRANSCRIPTION_DISCLAIMER, text),
        }
    }
}

impl fmt::Display for ProcessingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Summarize => write!(f, "summarize"),
            Self::Transcribe => write!(f, "transcribe"),
        }
    }
}
