use packslip::application::ports::{TextExtractor, TextExtractorError};
use packslip::domain::{ContentType, Document};
use packslip::infrastructure::text_processing::PdfTextAdapter;

fn pdf_document(size: usize) -> Document {
    Document::new("slips.pdf".to_string(), ContentType::Pdf, size as u64)
}

#[tokio::test]
async fn given_plain_text_bytes_when_extracting_then_reports_malformed_document() {
    let data = b"just some text pretending to be a pdf";
    let adapter = PdfTextAdapter::new();

    let error = adapter
        .extract(data, &pdf_document(data.len()))
        .await
        .unwrap_err();

    assert!(matches!(error, TextExtractorError::MalformedDocument(_)));
}

#[tokio::test]
async fn given_truncated_pdf_header_when_extracting_then_reports_malformed_document() {
    // Starts like a PDF but carries no valid cross-reference structure.
    let data = b"%PDF-1.7\ngarbage";
    let adapter = PdfTextAdapter::new();

    let error = adapter
        .extract(data, &pdf_document(data.len()))
        .await
        .unwrap_err();

    assert!(matches!(error, TextExtractorError::MalformedDocument(_)));
}
