//! Prompt template adapters

mod prompt_dir;

pub use prompt_dir::{PromptDirStore, PROMPTS_DIR_ENV};
