use async_trait::async_trait;

/// The extraction collaborator: takes a fully built prompt and returns the
/// model's raw text response. The response is semi-structured at best; the
/// orchestrator owns parsing and the validator owns correctness.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn submit(&self, prompt: &str) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
