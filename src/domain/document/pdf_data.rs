//! PDF data value object

/// MIME type attached to every uploaded document
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Value object holding the raw bytes of a PDF ready for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfData {
    data: Vec<u8>,
}

impl PdfData {
    /// Create PdfData from raw bytes
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Get the raw bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the media type
    pub fn media_type(&self) -> &'static str {
        PDF_MEDIA_TYPE
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.size_bytes();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }

    /// Encode the document as standard base64
    pub fn to_base64(&self) -> String {
        use base64::Engine;
        base64::engine::general_purpose::STANDARD.encode(&self.data)
    }
}
