use std::time::Duration;

use async_trait::async_trait;

use crate::domain::transport::{HttpMethod, TransportError};
use crate::domain::DomainError;

/// Fixed deadline applied to every outbound call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Trait for HTTP client operations (for mocking)
///
/// Implementations classify every outcome: `Ok` for a 2xx JSON body,
/// `TransportError::Application` for a non-2xx status or unreadable payload,
/// `TransportError::Network` when the exchange could not complete.
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    async fn send_json(
        &self,
        method: HttpMethod,
        url: &str,
        headers: Vec<(String, String)>,
        body: Option<&serde_json::Value>,
    ) -> Result<serde_json::Value, TransportError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpClient {
    pub fn new() -> Result<Self, DomainError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Request URLs may carry credentials in the query string, so they are
    /// dropped from the error before it is formatted.
    fn classify_send_error(&self, error: reqwest::Error) -> TransportError {
        let error = error.without_url();

        if error.is_builder() {
            return TransportError::application(None, format!("Invalid request: {}", error));
        }

        if error.is_timeout() {
            return TransportError::network(format!(
                "Request timed out after {}s",
                self.timeout.as_secs()
            ));
        }

        TransportError::network(format!("Failed to reach server: {}", error))
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn send_json(
        &self,
        method: HttpMethod,
        url: &str,
        headers: Vec<(String, String)>,
        body: Option<&serde_json::Value>,
    ) -> Result<serde_json::Value, TransportError> {
        let mut request = self.client.request(to_reqwest_method(method), url);

        for (key, value) in headers {
            request = request.header(key, value);
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.classify_send_error(e))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.classify_send_error(e))?;

        if !status.is_success() {
            let error_body = serde_json::from_slice::<serde_json::Value>(&bytes).ok();
            return Err(TransportError::from_status(status.as_u16(), error_body));
        }

        if bytes.is_empty() {
            return Ok(serde_json::Value::Null);
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            TransportError::application(
                Some(status.as_u16()),
                format!("Failed to parse response: {}", e),
            )
        })
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::RwLock;

    /// A request captured by the mock
    #[derive(Debug, Clone)]
    pub struct RecordedRequest {
        pub method: HttpMethod,
        pub url: String,
        pub headers: Vec<(String, String)>,
        pub body: Option<serde_json::Value>,
    }

    impl RecordedRequest {
        pub fn header(&self, name: &str) -> Option<&str> {
            self.headers
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str())
        }
    }

    #[derive(Debug, Default)]
    pub struct MockHttpClient {
        responses: RwLock<HashMap<String, serde_json::Value>>,
        errors: RwLock<HashMap<String, TransportError>>,
        requests: RwLock<Vec<RecordedRequest>>,
    }

    impl MockHttpClient {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_response(self, url: impl Into<String>, response: serde_json::Value) -> Self {
            self.responses.write().unwrap().insert(url.into(), response);
            self
        }

        pub fn with_error(self, url: impl Into<String>, error: TransportError) -> Self {
            self.errors.write().unwrap().insert(url.into(), error);
            self
        }

        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.read().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpClientTrait for MockHttpClient {
        async fn send_json(
            &self,
            method: HttpMethod,
            url: &str,
            headers: Vec<(String, String)>,
            body: Option<&serde_json::Value>,
        ) -> Result<serde_json::Value, TransportError> {
            self.requests.write().unwrap().push(RecordedRequest {
                method,
                url: url.to_string(),
                headers,
                body: body.cloned(),
            });

            if let Some(error) = self.errors.read().unwrap().get(url) {
                return Err(error.clone());
            }

            self.responses
                .read()
                .unwrap()
                .get(url)
                .cloned()
                .ok_or_else(|| TransportError::network(format!("No mock response for {}", url)))
        }
    }
}
