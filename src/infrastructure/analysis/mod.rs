//! Document analysis adapters

mod anthropic;

pub use anthropic::{AnthropicAnalyzer, BASE_URL_ENV, DEFAULT_BASE_URL};
