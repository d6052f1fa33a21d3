//! Summarize / transcribe paper use case

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::analysis::{AnalysisRequest, ProcessingMode};
use crate::domain::document::{PdfData, PdfSource};
use crate::domain::model::{estimate_cost, CostEstimate, ModelId, TokenUsage};

use super::ports::{
    AnalysisError, DocumentAnalyzer, FetchError, OutputError, OutputWriter, PdfFetcher,
    PromptError, PromptStore,
};

/// Errors from the process-paper use case
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("PDF file not found: {}", .path.display())]
    MissingInput { path: PathBuf },

    #[error("Failed to read PDF {}: {reason}", .path.display())]
    ReadFailed { path: PathBuf, reason: String },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Input parameters for the use case
#[derive(Debug, Clone)]
pub struct ProcessInput {
    /// Where the PDF lives
    pub source: PdfSource,
    /// Summary or transcription
    pub mode: ProcessingMode,
    /// Canonical model id
    pub model: ModelId,
    /// Prompt template file name
    pub prompt_file: String,
    /// Explicit output path; derived from the source when absent
    pub output: Option<PathBuf>,
    /// Directory for derived output paths
    pub output_dir: PathBuf,
}

/// A fully built request waiting to be submitted
#[derive(Debug, Clone)]
pub struct PreparedJob {
    pub mode: ProcessingMode,
    pub pdf_path: PathBuf,
    pub output_path: PathBuf,
    pub request: AnalysisRequest,
}

/// Output from the use case
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Where the markdown was written
    pub output_path: PathBuf,
    pub usage: TokenUsage,
    pub cost: CostEstimate,
}

/// Acquire a PDF, ask the model about it, and save the answer
pub struct ProcessPaperUseCase<F, P, A, W>
where
    F: PdfFetcher,
    P: PromptStore,
    A: DocumentAnalyzer,
    W: OutputWriter,
{
    fetcher: F,
    prompts: P,
    analyzer: A,
    writer: W,
}

impl<F, P, A, W> ProcessPaperUseCase<F, P, A, W>
where
    F: PdfFetcher,
    P: PromptStore,
    A: DocumentAnalyzer,
    W: OutputWriter,
{
    /// Create a new use case instance
    pub fn new(fetcher: F, prompts: P, analyzer: A, writer: W) -> Self {
        Self {
            fetcher,
            prompts,
            analyzer,
            writer,
        }
    }

    /// Resolve the PDF, load the prompt and build the request.
    ///
    /// Nothing is sent to the service and nothing is written here.
    pub async fn prepare(&self, input: ProcessInput) -> Result<PreparedJob, ProcessError> {
        let pdf_path = match &input.source {
            PdfSource::Url(url) => self.fetcher.fetch(url).await?,
            PdfSource::Local(path) => path.clone(),
        };

        if !pdf_path.is_file() {
            return Err(ProcessError::MissingInput { path: pdf_path });
        }

        let output_path = input.output.clone().unwrap_or_else(|| {
            let stem = input.source.suggested_stem(&pdf_path);
            input.output_dir.join(input.mode.output_file_name(&stem))
        });

        let prompt = self.prompts.load(&input.prompt_file).await?;
        let document = read_pdf(&pdf_path).await?;
        debug!(
            path = %pdf_path.display(),
            size = %document.human_readable_size(),
            "Loaded PDF"
        );

        let request = AnalysisRequest::new(document, prompt, input.model, input.mode);

        Ok(PreparedJob {
            mode: input.mode,
            pdf_path,
            output_path,
            request,
        })
    }

    /// Submit a prepared job and write the result.
    ///
    /// The output file is only touched after the service answered successfully.
    pub async fn submit(&self, job: PreparedJob) -> Result<ProcessOutput, ProcessError> {
        info!(
            model = %job.request.model(),
            max_tokens = job.request.max_tokens(),
            "Submitting document"
        );
        let result = self.analyzer.analyze(&job.request).await?;

        let content = job.mode.render(&result.text);
        self.writer.write(&job.output_path, &content).await?;

        Ok(ProcessOutput {
            output_path: job.output_path,
            usage: result.usage,
            cost: estimate_cost(job.request.model(), result.usage),
        })
    }

    /// Prepare and submit in one step
    pub async fn execute(&self, input: ProcessInput) -> Result<ProcessOutput, ProcessError> {
        let job = self.prepare(input).await?;
        self.submit(job).await
    }
}

async fn read_pdf(path: &Path) -> Result<PdfData, ProcessError> {
    tokio::fs::read(path)
        .await
        .map(PdfData::new)
        .map_err(|e| ProcessError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}
