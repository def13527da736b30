use async_trait::async_trait;

use crate::application::ports::{TextExtractor, TextExtractorError};
use crate::domain::{Document, ExtractedText, PageText};

/// Test double: treats the upload as UTF-8 text and splits pages on form
/// feed, so multi-page fixtures are plain strings.
pub struct MockTextExtractor;

#[async_trait]
impl TextExtractor for MockTextExtractor {
    async fn extract(
        &self,
        data: &[u8],
        _document: &Document,
    ) -> Result<ExtractedText, TextExtractorError> {
        let text = String::from_utf8(data.to_vec())
            .map_err(|e| TextExtractorError::MalformedDocument(e.to_string()))?;

        let pages = text
            .split('\u{c}')
            .enumerate()
            .map(|(i, page)| PageText {
                number: (i + 1) as u32,
                text: page.to_string(),
            })
            .collect();

        Ok(ExtractedText::new(pages))
    }
}
