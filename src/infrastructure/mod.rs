//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like the Anthropic API and the filesystem.

pub mod analysis;
pub mod config;
pub mod download;
pub mod output;
pub mod prompts;

// Re-export adapters
pub use analysis::AnthropicAnalyzer;
pub use config::EnvFileCredentialStore;
pub use download::CachedHttpFetcher;
pub use output::MarkdownFileWriter;
pub use prompts::PromptDirStore;
