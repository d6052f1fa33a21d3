//! Output adapters

mod markdown_file;

pub use markdown_file::MarkdownFileWriter;
