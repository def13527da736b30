mod mock_text_extractor;
mod pdf_adapter;
mod text_sanitizer;

pub use mock_text_extractor::MockTextExtractor;
pub use pdf_adapter::PdfTextAdapter;
pub use text_sanitizer::sanitize_extracted_text;
