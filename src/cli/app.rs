//! Main app runner for the paper commands

use std::env;
use std::process::ExitCode;

use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::application::ports::CredentialStore;
use crate::application::{ProcessInput, ProcessPaperUseCase};
use crate::domain::analysis::ProcessingMode;
use crate::domain::document::PdfSource;
use crate::domain::model::ModelId;
use crate::infrastructure::{
    AnthropicAnalyzer, CachedHttpFetcher, EnvFileCredentialStore, MarkdownFileWriter,
    PromptDirStore,
};

use super::args::PaperOptions;
use super::presenter::{format_count, Presenter};

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Install the stderr log subscriber. `RUST_LOG` overrides the default level.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "nutshell=debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Run `summarize` or `transcribe`
pub async fn run_paper_command(options: PaperOptions) -> ExitCode {
    let mut presenter = Presenter::new();

    let model = ModelId::resolve(&options.model);
    if model.is_premium_tier() && !confirm_premium_model(&presenter) {
        presenter.info("Aborted.");
        return ExitCode::from(EXIT_SUCCESS);
    }

    let api_key = load_api_key().await;

    let output_dir = match env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            presenter.error(&format!("Error: cannot determine working directory: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let use_case = ProcessPaperUseCase::new(
        CachedHttpFetcher::new(),
        PromptDirStore::new(),
        AnthropicAnalyzer::from_env(api_key),
        MarkdownFileWriter::new(),
    );

    let input = ProcessInput {
        source: PdfSource::parse(&options.pdf_path),
        mode: options.mode,
        model: model.clone(),
        prompt_file: options.prompt.clone(),
        output: options.output,
        output_dir,
    };

    let job = match use_case.prepare(input).await {
        Ok(job) => job,
        Err(e) => {
            presenter.error(&format!("Error: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    presenter.info(&format!("Processing: {}", job.pdf_path.display()));
    presenter.info(&format!("Using model: {}", model));
    presenter.info(&format!("Using prompt: {}", options.prompt));

    presenter.start_spinner(&format!("{}...", progress_label(options.mode)));
    let result = use_case.submit(job).await;
    presenter.stop_spinner();

    match result {
        Ok(output) => {
            presenter.success(&format!(
                "{} saved to: {}",
                options.mode.label(),
                output.output_path.display()
            ));
            presenter.key_value(
                "Tokens",
                &format!(
                    "{} in, {} out",
                    format_count(output.usage.input_tokens),
                    format_count(output.usage.output_tokens)
                ),
            );
            if output.cost.amount().is_some() {
                presenter.key_value("Cost", &output.cost.to_string());
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&format!("{} failed: {}", options.mode.label(), e));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Warn about the premium tier and ask before spending on it
fn confirm_premium_model(presenter: &Presenter) -> bool {
    presenter.warn(
        "Opus models are very expensive and may not provide significant benefits \
         for summarization/transcription tasks. Consider using 'sonnet' or 'haiku' instead.",
    );
    presenter.confirm("Continue with opus? (y/N):")
}

/// Get the API key from environment or config file.
///
/// A missing key is not fatal here; the service reports it.
async fn load_api_key() -> Option<String> {
    let store = EnvFileCredentialStore::new();
    match store.api_key().await {
        Ok(key) => {
            if key.is_none() {
                warn!(
                    "No API key found in ANTHROPIC_API_KEY or {}",
                    store.path().display()
                );
            }
            key
        }
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

fn progress_label(mode: ProcessingMode) -> &'static str {
    match mode {
        ProcessingMode::Summarize => "Summarizing",
        ProcessingMode::Transcribe => "Transcribing",
    }
}
