use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use crate::application::ports::{LlmClient, TextExtractor};
use crate::application::services::{ExtractionError, PipelineError};
use crate::domain::{ContentType, Document};
use crate::presentation::state::AppState;

use super::ErrorResponse;

/// Accepts the multipart upload and drives the whole pipeline inline in the
/// request task. Success streams the CSV back as an attachment; every
/// failure path answers with a JSON error body and a status reflecting the
/// failure class.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<X, L>(
    State(state): State<AppState<X, L>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    X: TextExtractor + 'static,
    L: LlmClient + 'static,
{
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some("file") => {
                break field;
            }
            Ok(Some(_)) => continue,
            Ok(None) => {
                tracing::warn!("Upload request without a file field");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    "No file provided".to_string(),
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read multipart: {}", e),
                );
            }
        }
    };

    let filename = match field.file_name() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => {
            tracing::warn!("Upload request with empty filename");
            return error_response(StatusCode::BAD_REQUEST, "No file selected".to_string());
        }
    };

    let content_type_str = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();
    let Some(content_type) = ContentType::from_mime(&content_type_str) else {
        tracing::warn!(content_type = %content_type_str, "Unsupported content type");
        return error_response(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            format!("File must be a PDF, got {}", content_type_str),
        );
    };

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Failed to read file: {}", e),
            );
        }
    };

    if data.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Uploaded file is empty".to_string());
    }

    let max_bytes = state.settings.extraction.max_file_size_mb * 1024 * 1024;
    if data.len() > max_bytes {
        tracing::warn!(bytes = data.len(), max_bytes, "Upload exceeds size cap");
        return error_response(
            StatusCode::PAYLOAD_TOO_LARGE,
            format!(
                "File exceeds the {} MB limit",
                state.settings.extraction.max_file_size_mb
            ),
        );
    }

    let document = Document::new(filename, content_type, data.len() as u64);
    tracing::info!(
        document_id = %document.id.as_uuid(),
        filename = %document.filename,
        bytes = data.len(),
        "Processing upload"
    );

    match state.manifest_service.convert(&data, &document).await {
        Ok(csv) => {
            let disposition = format!("attachment; filename=\"{}\"", csv.filename);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                csv.bytes,
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(
                document_id = %document.id.as_uuid(),
                error = %e,
                "Conversion failed"
            );
            error_response(status_for(&e), user_message(&e))
        }
    }
}

fn error_response(status: StatusCode, message: String) -> axum::response::Response {
    (status, Json(ErrorResponse { error: message })).into_response()
}

/// Document problems are the caller's to fix; collaborator problems are
/// ours. The distinction drives 4xx vs 5xx.
fn status_for(error: &PipelineError) -> StatusCode {
    match error {
        PipelineError::Document(_) | PipelineError::NoExtractableText => StatusCode::BAD_REQUEST,
        PipelineError::Extraction(ExtractionError::NoValidRecords { .. }) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        PipelineError::Extraction(_) => StatusCode::BAD_GATEWAY,
        PipelineError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn user_message(error: &PipelineError) -> String {
    match error {
        PipelineError::Document(e) => format!("Invalid file: {}", e),
        PipelineError::NoExtractableText => "No readable text found in PDF".to_string(),
        PipelineError::Extraction(ExtractionError::NoValidRecords { .. }) => {
            "Could not extract any valid packing slip records".to_string()
        }
        PipelineError::Extraction(e) => format!("Extraction service failed: {}", e),
        PipelineError::Export(e) => format!("Failed to build CSV: {}", e),
    }
}
