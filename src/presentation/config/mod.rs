mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DerivationSettings, ExportSettings, ExtractionSettings, LlmSettings, LoggingSettings,
    ServerSettings, Settings,
};
