//! Analysis domain module

mod mode;
mod request;

pub use mode::{
    ProcessingMode, SUMMARY_MAX_TOKENS, TRANSCRIPTION_DISCLAIMER, TRANSCRIPTION_MAX_TOKENS,
};
pub use request::{AnalysisRequest, AnalysisResult};
