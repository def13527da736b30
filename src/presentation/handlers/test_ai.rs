use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, TextExtractor};
use crate::domain::CandidateRecord;
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Deserialize)]
pub struct TestAiRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct TestAiResponse {
    pub result: Vec<CandidateRecord>,
}

/// Diagnostic: one collaborator call on caller-supplied text, candidates
/// echoed back unvalidated. For operability checks only; not part of the
/// conversion contract.
#[tracing::instrument(skip(state, request))]
pub async fn test_ai_handler<X, L>(
    State(state): State<AppState<X, L>>,
    Json(request): Json<TestAiRequest>,
) -> impl IntoResponse
where
    X: TextExtractor + 'static,
    L: LlmClient + 'static,
{
    if request.text.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No text provided".to_string(),
            }),
        )
            .into_response();
    }

    match state.extraction_service.probe(&request.text).await {
        Ok(candidates) => {
            tracing::info!(candidates = candidates.len(), "Probe extraction complete");
            (StatusCode::OK, Json(TestAiResponse { result: candidates })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Probe extraction failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: format!("Extraction test failed: {}", e),
                }),
            )
                .into_response()
        }
    }
}
