use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{LlmClient, TextExtractor};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    health_handler, service_info_handler, test_ai_handler, upload_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<X, L>(state: AppState<X, L>) -> Router
where
    X: TextExtractor + 'static,
    L: LlmClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Multipart framing adds overhead on top of the configured file cap; the
    // handler enforces the precise per-file limit itself.
    let body_limit = (state.settings.extraction.max_file_size_mb + 1) * 1024 * 1024;

    Router::new()
        .route("/", get(service_info_handler))
        .route("/health", get(health_handler))
        .route("/upload", post(upload_handler::<X, L>))
        .route("/test-ai", post(test_ai_handler::<X, L>))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
