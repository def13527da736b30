use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::{LlmClient, TextExtractor, TextExtractorError};
use crate::domain::{DerivationPolicy, DerivedRecord, Document};

use super::csv_export::{CsvAssembler, CsvExportError};
use super::extraction_service::{ExtractionError, ExtractionService};

/// The assembled CSV plus its download name. Request-scoped; streamed out
/// and discarded.
#[derive(Debug, Clone)]
pub struct CsvDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Drives one upload through the whole pipeline: text extraction, record
/// extraction, derivation, CSV assembly. Stages run exactly once per request
/// (the bounded retries live inside the extraction service) and strictly in
/// order; dropping the future between awaits abandons the request cleanly.
pub struct ManifestService<X, L>
where
    X: TextExtractor,
    L: LlmClient,
{
    text_extractor: Arc<X>,
    extraction_service: Arc<ExtractionService<L>>,
    derivation_policy: DerivationPolicy,
    assembler: CsvAssembler,
}

impl<X, L> ManifestService<X, L>
where
    X: TextExtractor,
    L: LlmClient,
{
    pub fn new(
        text_extractor: Arc<X>,
        extraction_service: Arc<ExtractionService<L>>,
        derivation_policy: DerivationPolicy,
        assembler: CsvAssembler,
    ) -> Self {
        Self {
            text_extractor,
            extraction_service,
            derivation_policy,
            assembler,
        }
    }

    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
            size_bytes = document.size_bytes,
        )
    )]
    pub async fn convert(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<CsvDocument, PipelineError> {
        tracing::debug!(stage = "extracting", "Extracting document text");
        let text = self.text_extractor.extract(data, document).await?;

        if text.is_blank() {
            tracing::warn!(pages = text.page_count(), "Document has no readable text");
            return Err(PipelineError::NoExtractableText);
        }

        tracing::debug!(stage = "validating", pages = text.page_count(), "Extracting records");
        let validated = self.extraction_service.extract_records(&text).await?;

        let derived: Vec<DerivedRecord> = validated
            .into_iter()
            .map(|record| DerivedRecord::derive(record, &self.derivation_policy))
            .collect();

        tracing::debug!(stage = "assembling", rows = derived.len(), "Assembling CSV");
        let bytes = self.assembler.assemble(&derived)?;
        let filename = self.assembler.filename(Utc::now());

        tracing::info!(rows = derived.len(), filename = %filename, "Conversion complete");
        Ok(CsvDocument { filename, bytes })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("document: {0}")]
    Document(#[from] TextExtractorError),
    #[error("document contains no readable text")]
    NoExtractableText,
    #[error("extraction: {0}")]
    Extraction(#[from] ExtractionError),
    #[error("csv export: {0}")]
    Export(#[from] CsvExportError),
}
