use async_trait::async_trait;

use crate::domain::{Document, ExtractedText};

/// Pulls page-ordered text out of an uploaded document. Implementations must
/// preserve page boundaries and represent textless pages as empty blocks
/// rather than dropping them.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ExtractedText, TextExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextExtractorError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("malformed document: {0}")]
    MalformedDocument(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
