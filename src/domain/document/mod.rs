//! Document domain module

mod pdf_data;
mod pdf_source;
mod prompt;

pub use pdf_data::{PdfData, PDF_MEDIA_TYPE};
pub use pdf_source::{cache_key, extract_arxiv_id, is_url, PdfSource};
pub use prompt::PromptTemplate;
