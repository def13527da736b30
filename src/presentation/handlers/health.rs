use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
        }),
    )
}

#[derive(Serialize)]
pub struct ServiceInfo {
    pub message: String,
    pub status: String,
    pub endpoints: Vec<String>,
}

pub async fn service_info_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ServiceInfo {
            message: "Packing Slip Parser API".to_string(),
            status: "running".to_string(),
            endpoints: vec![
                "/health".to_string(),
                "/upload".to_string(),
                "/test-ai".to_string(),
            ],
        }),
    )
}
