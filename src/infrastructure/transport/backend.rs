use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::transport::{RequestDescriptor, Transport, TransportError};
use crate::infrastructure::credentials::CredentialStore;
use crate::infrastructure::http::HttpClientTrait;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Transport to the wellness backend
///
/// Attaches JSON headers and the active bearer credential to every call.
/// Performs no retries.
#[derive(Debug)]
pub struct BackendTransport<C: HttpClientTrait> {
    client: C,
    base_url: String,
    credentials: Arc<CredentialStore>,
}

impl<C: HttpClientTrait> BackendTransport<C> {
    pub fn new(client: C, base_url: impl Into<String>, credentials: Arc<CredentialStore>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            base_url,
            credentials,
        }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn headers(&self, request: &RequestDescriptor) -> Vec<(String, String)> {
        let mut headers = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ];

        if let Some(credential) = self.credentials.current() {
            headers.push(("Authorization".to_string(), credential.bearer_header()));
        }

        headers.extend(request.headers().iter().cloned());
        headers
    }
}

#[async_trait]
impl<C: HttpClientTrait> Transport for BackendTransport<C> {
    async fn send(&self, request: &RequestDescriptor) -> Result<serde_json::Value, TransportError> {
        let url = self.url(request.path());
        debug!(method = %request.method(), url = %url, "Sending backend request");

        self.client
            .send_json(request.method(), &url, self.headers(request), request.body())
            .await
            .map_err(|error| match error {
                TransportError::Network { message } => TransportError::network(format!(
                    "Cannot connect to backend at {}: {}",
                    self.base_url, message
                )),
                other => other,
            })
    }
}
