//! Domain layer - Core business logic
//!
//! Contains value objects, static lookup tables, and domain errors.
//! This layer has no dependencies on external systems.

pub mod analysis;
pub mod document;
pub mod error;
pub mod model;

// Re-export common types
pub use analysis::{AnalysisRequest, AnalysisResult, ProcessingMode};
pub use document::{PdfData, PdfSource, PromptTemplate};
pub use error::*;
pub use model::{estimate_cost, CostEstimate, ModelId, TokenUsage};
