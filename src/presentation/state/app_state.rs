use std::sync::Arc;

use crate::application::ports::{LlmClient, TextExtractor};
use crate::application::services::{ExtractionService, ManifestService};
use crate::presentation::config::Settings;

pub struct AppState<X, L>
where
    X: TextExtractor,
    L: LlmClient,
{
    pub manifest_service: Arc<ManifestService<X, L>>,
    pub extraction_service: Arc<ExtractionService<L>>,
    pub settings: Settings,
}

impl<X, L> Clone for AppState<X, L>
where
    X: TextExtractor,
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            manifest_service: Arc::clone(&self.manifest_service),
            extraction_service: Arc::clone(&self.extraction_service),
            settings: self.settings.clone(),
        }
    }
}
