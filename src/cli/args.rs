//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::analysis::ProcessingMode;
use crate::domain::model::DEFAULT_MODEL_ALIAS;

/// nutshell - research paper assistant tools using the Claude API
#[derive(Parser, Debug)]
#[command(name = "nutshell")]
#[command(version)]
#[command(about = "Research paper assistant tools using the Claude API")]
#[command(long_about = None)]
pub struct Cli {
    /// Show debug logs on stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a research paper
    #[command(visible_alias = "summarise")]
    Summarize(PaperArgs),
    /// Create a full transcription of a research paper
    Transcribe(PaperArgs),
}

/// Arguments shared by every paper command
#[derive(Args, Debug, Clone)]
pub struct PaperArgs {
    /// Path or URL to the PDF file
    #[arg(value_name = "PDF")]
    pub pdf_path: String,

    /// Output path (default: <name>_summary.md or <name>_transcription.md)
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Model to use: sonnet, haiku, opus, or a full model ID
    #[arg(short = 'm', long, value_name = "MODEL", default_value = DEFAULT_MODEL_ALIAS)]
    pub model: String,

    /// Prompt file from the prompts directory
    /// (default: v2_no_scratchpad.txt for summarize, transcribe_v1.txt for transcribe)
    #[arg(short = 'p', long, value_name = "FILE")]
    pub prompt: Option<String>,
}

impl PaperArgs {
    /// Resolve per-command defaults into options
    pub fn into_options(self, mode: ProcessingMode) -> PaperOptions {
        PaperOptions {
            pdf_path: self.pdf_path,
            output: self.output,
            model: self.model,
            prompt: self
                .prompt
                .unwrap_or_else(|| mode.default_prompt_file().to_string()),
            mode,
        }
    }
}

/// Parsed paper command options
#[derive(Debug, Clone)]
pub struct PaperOptions {
    pub pdf_path: String,
    pub output: Option<PathBuf>,
    pub model: String,
    pub prompt: String,
    pub mode: ProcessingMode,
}

impl Commands {
    /// Options for the selected command
    pub fn into_options(self) -> PaperOptions {
        match self {
            Commands::Summarize(args) => args.into_options(ProcessingMode::Summarize),
            Commands::Transcribe(args) => args.into_options(ProcessingMode::Transcribe),
        }
    }
}
