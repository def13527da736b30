use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use packslip::application::services::{
    CsvAssembler, ExtractionLimits, ExtractionService, ManifestService,
};
use packslip::infrastructure::llm::GeminiClient;
use packslip::infrastructure::observability::{init_tracing, TracingConfig};
use packslip::infrastructure::text_processing::PdfTextAdapter;
use packslip::presentation::{create_router, AppState, Environment, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig {
            environment: environment.to_string(),
            json_format: settings.logging.enable_json,
            default_filter: format!(
                "{},packslip=debug,tower_http=debug",
                settings.logging.level
            ),
        },
        settings.server.port,
    );

    if settings.llm.api_key.is_empty() {
        tracing::warn!("llm.api_key is empty; extraction calls will fail until one is configured");
    }

    let text_extractor = Arc::new(PdfTextAdapter::new());
    let llm_client = Arc::new(GeminiClient::new(&settings.llm));

    let extraction_service = Arc::new(ExtractionService::new(
        llm_client,
        ExtractionLimits {
            max_parse_retries: settings.extraction.max_parse_retries,
            max_record_attempts: settings.extraction.max_record_attempts,
        },
        Duration::from_secs(settings.llm.request_timeout_secs),
    ));

    let manifest_service = Arc::new(ManifestService::new(
        text_extractor,
        Arc::clone(&extraction_service),
        settings.derivation.policy(),
        CsvAssembler::new(settings.export.filename_prefix.clone()),
    ));

    let state = AppState {
        manifest_service,
        extraction_service,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
