use crate::application::ports::{LlmClient, LlmClientError};

/// Test double returning a canned response for every prompt.
pub struct MockLlmClient {
    response: String,
}

impl MockLlmClient {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn submit(&self, _prompt: &str) -> Result<String, LlmClientError> {
        Ok(self.response.clone())
    }
}
