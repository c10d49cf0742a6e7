use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::provider::{ProviderTarget, RetryPolicy};
use crate::infrastructure::provider::DEFAULT_GEMINI_ENDPOINT;
use crate::infrastructure::transport::DEFAULT_BACKEND_URL;

/// Environment variable consulted when `provider.api_key` is not configured
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub provider: ProviderConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub max_retries: u32,
    /// Tried in order; later entries are failover targets
    pub targets: Vec<ProviderTarget>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON file holding the persisted credential
    pub credential_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            max_retries: RetryPolicy::default().max_retries,
            targets: vec![
                ProviderTarget::new(DEFAULT_GEMINI_ENDPOINT, "gemini-1.5-flash"),
                ProviderTarget::new(DEFAULT_GEMINI_ENDPOINT, "gemini-1.5-pro"),
            ],
        }
    }
}

impl ProviderConfig {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_retries)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            credential_path: PathBuf::from(".eqcoach/credentials.json"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        Ok(app_config.with_fallback_api_key(std::env::var(GEMINI_API_KEY_ENV).ok()))
    }

    /// Uses `key` when no non-blank provider key is configured
    pub fn with_fallback_api_key(mut self, key: Option<String>) -> Self {
        let configured = self
            .provider
            .api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty());

        if !configured {
            self.provider.api_key = key.filter(|k| !k.trim().is_empty());
        }

        self
    }
}
