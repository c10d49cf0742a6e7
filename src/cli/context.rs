use std::sync::Arc;

use anyhow::Context;
use tracing::warn;

use crate::config::AppConfig;
use crate::domain::provider::RetryingInvoker;
use crate::domain::storage::KeyValueStore;
use crate::infrastructure::credentials::CredentialStore;
use crate::infrastructure::http::HttpClient;
use crate::infrastructure::provider::GeminiClient;
use crate::infrastructure::services::{DirectRewriter, FallbackEngine};
use crate::infrastructure::storage::FileKeyValueStore;
use crate::infrastructure::transport::BackendTransport;

/// Wired client stack shared by all commands
#[derive(Debug)]
pub struct ClientContext {
    pub config: AppConfig,
    pub credentials: Arc<CredentialStore>,
    pub engine: FallbackEngine,
}

impl ClientContext {
    pub async fn build(config: AppConfig) -> anyhow::Result<Self> {
        let storage: Arc<dyn KeyValueStore> =
            Arc::new(FileKeyValueStore::new(&config.storage.credential_path));
        let credentials = Arc::new(CredentialStore::new(storage));

        if let Err(e) = credentials.restore().await {
            warn!(error = %e, "Could not restore stored credential, continuing without it");
        }

        let transport = BackendTransport::new(
            HttpClient::new()?,
            config.backend.base_url.clone(),
            credentials.clone(),
        );

        Ok(Self {
            engine: FallbackEngine::new(Arc::new(transport)),
            credentials,
            config,
        })
    }

    pub fn direct_rewriter(&self) -> anyhow::Result<DirectRewriter<GeminiClient<HttpClient>>> {
        let api_key = self
            .config
            .provider
            .api_key
            .clone()
            .context("No provider API key configured (set GEMINI_API_KEY or APP__PROVIDER__API_KEY)")?;

        let invoker = RetryingInvoker::new(
            GeminiClient::new(HttpClient::new()?, api_key),
            self.config.provider.targets.clone(),
            self.config.provider.retry_policy(),
        );

        Ok(DirectRewriter::new(invoker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> AppConfig {
        let mut config = AppConfig::default();
        config.storage.credential_path = dir.path().join("credentials.json");
        config
    }

    #[tokio::test]
    async fn test_build_restores_persisted_credential() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        FileKeyValueStore::new(&config.storage.credential_path)
            .set("auth_token", "tok-7")
            .await
            .unwrap();

        let context = ClientContext::build(config).await.unwrap();

        assert_eq!(context.credentials.current().unwrap().token(), "tok-7");
    }

    #[tokio::test]
    async fn test_direct_rewriter_requires_api_key() {
        let dir = TempDir::new().unwrap();
        let context = ClientContext::build(config_in(&dir)).await.unwrap();

        assert!(context.direct_rewriter().is_err());
    }

    #[tokio::test]
    async fn test_direct_rewriter_uses_configured_targets() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir).with_fallback_api_key(Some("key".to_string()));
        let context = ClientContext::build(config).await.unwrap();

        assert!(context.direct_rewriter().is_ok());
    }
}
