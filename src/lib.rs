//! nutshell - summarize and transcribe research papers with Claude
//!
//! This crate uploads a PDF (local or fetched from a URL) to the Anthropic
//! Messages API together with a prompt template, and writes the model's
//! answer to a markdown file.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Model aliases, price table, processing modes, PDF sources
//! - **Application**: The process-paper use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Anthropic API, PDF cache, prompt files, etc.)
//! - **CLI**: Command-line interface, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
