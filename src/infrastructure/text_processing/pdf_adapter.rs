use std::time::Duration;

use async_trait::async_trait;
use lopdf::Document as LopdfDocument;

use crate::application::ports::{TextExtractor, TextExtractorError};
use crate::domain::{Document, ExtractedText, PageText};

use super::text_sanitizer::sanitize_extracted_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// PDF text extraction on top of lopdf. Parsing is CPU-bound, so it runs on
/// a blocking thread under a timeout; page order and count are preserved
/// exactly, with textless pages kept as empty blocks.
#[derive(Default)]
pub struct PdfTextAdapter;

impl PdfTextAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(data: &[u8]) -> Result<Vec<PageText>, TextExtractorError> {
        let doc = LopdfDocument::load_mem(data).map_err(|e| {
            TextExtractorError::MalformedDocument(format!("failed to parse PDF: {e}"))
        })?;

        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        let mut pages = Vec::with_capacity(page_numbers.len());

        for page_number in page_numbers {
            // A page that yields no text (scanned image, drawing-only) still
            // occupies its slot so page numbering matches the source.
            let text = doc.extract_text(&[page_number]).unwrap_or_default();
            pages.push(PageText {
                number: page_number,
                text: sanitize_extracted_text(&text),
            });
        }

        Ok(pages)
    }
}

#[async_trait]
impl TextExtractor for PdfTextAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ExtractedText, TextExtractorError> {
        if !data.starts_with(b"%PDF-") {
            return Err(TextExtractorError::MalformedDocument(
                "missing %PDF header".to_string(),
            ));
        }

        let owned = data.to_vec();
        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&owned)),
        )
        .await
        .map_err(|_| TextExtractorError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| TextExtractorError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(page_count = pages.len(), "PDF text extraction complete");

        Ok(ExtractedText::new(pages))
    }
}
