mod health;
mod test_ai;
mod upload;

use serde::Serialize;

pub use health::{health_handler, service_info_handler};
pub use test_ai::test_ai_handler;
pub use upload::upload_handler;

/// Single error body shape for every failure path.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
