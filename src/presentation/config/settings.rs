use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::domain::DerivationPolicy;

use super::Environment;

/// Every operational tunable of the pipeline. Loaded from an
/// `appsettings.<env>` file (optional) overridden by `APP__`-prefixed
/// environment variables; nothing here is read from ambient globals after
/// startup.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub extraction: ExtractionSettings,
    pub derivation: DerivationSettings,
    pub export: ExportSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let configuration = Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        configuration.try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub request_timeout_secs: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key: String::new(),
            model: "gemini-2.5-flash-lite".to_string(),
            temperature: 0.1,
            max_output_tokens: 4000,
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionSettings {
    pub max_file_size_mb: usize,
    pub max_parse_retries: u32,
    pub max_record_attempts: u32,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            max_file_size_mb: 20,
            max_parse_retries: 2,
            max_record_attempts: 2,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DerivationSettings {
    pub packages_per_unit: u32,
    pub package_weight_kg: f64,
}

impl DerivationSettings {
    pub fn policy(&self) -> DerivationPolicy {
        DerivationPolicy {
            packages_per_unit: self.packages_per_unit,
            package_weight_kg: self.package_weight_kg,
        }
    }
}

impl Default for DerivationSettings {
    fn default() -> Self {
        let policy = DerivationPolicy::default();
        Self {
            packages_per_unit: policy.packages_per_unit,
            package_weight_kg: policy.package_weight_kg,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub filename_prefix: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            filename_prefix: "packing_slip_data".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            enable_json: false,
        }
    }
}
