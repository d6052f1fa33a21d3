//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod analyzer;
pub mod config;
pub mod fetcher;
pub mod output;
pub mod prompts;

// Re-export common types
pub use analyzer::{AnalysisError, DocumentAnalyzer};
pub use config::CredentialStore;
pub use fetcher::{FetchError, PdfFetcher};
pub use output::{OutputError, OutputWriter};
pub use prompts::{PromptError, PromptStore};
