use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::provider::{GenerativeClient, ProviderErrorBody, ProviderReply, ProviderTarget};
use crate::domain::transport::{HttpMethod, TransportError};
use crate::infrastructure::http::HttpClientTrait;

pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini generate-content client
pub struct GeminiClient<C: HttpClientTrait> {
    client: C,
    api_key: String,
}

impl<C: HttpClientTrait> std::fmt::Debug for GeminiClient<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("client", &self.client)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl<C: HttpClientTrait> GeminiClient<C> {
    pub fn new(client: C, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
        }
    }

    fn generate_url(&self, target: &ProviderTarget) -> Result<String, TransportError> {
        let base = format!(
            "{}/{}:generateContent",
            target.endpoint.trim_end_matches('/'),
            target.model
        );

        let mut url = reqwest::Url::parse(&base).map_err(|e| {
            TransportError::application(None, format!("Invalid provider target {}: {}", target, e))
        })?;
        url.query_pairs_mut().append_pair("key", &self.api_key);

        Ok(url.into())
    }

    fn build_request(prompt: &str) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: Some(prompt.to_string()),
                }],
            }],
        }
    }

    fn parse_response(json: serde_json::Value) -> ProviderReply {
        if let Some(error) = ProviderErrorBody::from_body(&json) {
            return ProviderReply::error(error);
        }

        let response: GeminiResponse = match serde_json::from_value(json) {
            Ok(response) => response,
            Err(_) => return ProviderReply::default(),
        };

        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text);

        ProviderReply { text, error: None }
    }
}

#[async_trait]
impl<C: HttpClientTrait> GenerativeClient for GeminiClient<C> {
    async fn generate(
        &self,
        target: &ProviderTarget,
        prompt: &str,
    ) -> Result<ProviderReply, TransportError> {
        let body = serde_json::to_value(Self::build_request(prompt))
            .map_err(|e| TransportError::application(None, format!("Failed to encode request: {}", e)))?;

        let headers = vec![("Content-Type".to_string(), "application/json".to_string())];

        let url = self.generate_url(target)?;
        let json = self
            .client
            .send_json(HttpMethod::Post, &url, headers, Some(&body))
            .await?;

        Ok(Self::parse_response(json))
    }
}

// Gemini API types

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::provider::{InvokerError, RetryPolicy, RetryingInvoker};
    use crate::infrastructure::http::mock::MockHttpClient;
    use crate::infrastructure::http::HttpClient;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FLASH_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent?key=test-key";

    fn flash() -> ProviderTarget {
        ProviderTarget::new(DEFAULT_GEMINI_ENDPOINT, "gemini-1.5-flash")
    }

    #[tokio::test]
    async fn test_generate_extracts_first_candidate_text() {
        let mock = MockHttpClient::new().with_response(
            FLASH_URL,
            json!({
                "candidates": [
                    {"content": {"parts": [{"text": "I felt unheard in the meeting."}]}},
                    {"content": {"parts": [{"text": "ignored"}]}}
                ]
            }),
        );
        let client = GeminiClient::new(mock, "test-key");

        let reply = client.generate(&flash(), "rewrite this").await.unwrap();

        assert_eq!(reply.text.as_deref(), Some("I felt unheard in the meeting."));
        assert!(reply.error.is_none());

        let requests = client.client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(
            requests[0].body,
            Some(json!({"contents": [{"parts": [{"text": "rewrite this"}]}]}))
        );
    }

    #[tokio::test]
    async fn test_generate_surfaces_in_body_error() {
        let mock = MockHttpClient::new().with_response(
            FLASH_URL,
            json!({"error": {"code": 503, "message": "The model is overloaded.", "status": "UNAVAILABLE"}}),
        );
        let client = GeminiClient::new(mock, "test-key");

        let reply = client.generate(&flash(), "hi").await.unwrap();

        assert!(reply.text.is_none());
        assert!(reply.error.unwrap().is_overload());
    }

    #[tokio::test]
    async fn test_generate_without_candidates_has_no_text() {
        let mock = MockHttpClient::new().with_response(FLASH_URL, json!({"candidates": []}));
        let client = GeminiClient::new(mock, "test-key");

        let reply = client.generate(&flash(), "hi").await.unwrap();

        assert!(reply.text.is_none());
        assert!(reply.error.is_none());
    }

    #[tokio::test]
    async fn test_generate_propagates_transport_error() {
        let mock = MockHttpClient::new()
            .with_error(FLASH_URL, TransportError::from_status(503, None));
        let client = GeminiClient::new(mock, "test-key");

        let error = client.generate(&flash(), "hi").await.unwrap_err();

        assert_eq!(error.status(), Some(503));
    }

    #[test]
    fn test_api_key_is_query_encoded() {
        let client = GeminiClient::new(MockHttpClient::new(), "a&b=c d");

        let url = client.generate_url(&flash()).unwrap();

        assert!(url.ends_with("gemini-1.5-flash:generateContent?key=a%26b%3Dc+d"));
    }

    #[test]
    fn test_invalid_endpoint_is_application_error() {
        let client = GeminiClient::new(MockHttpClient::new(), "test-key");
        let target = ProviderTarget::new("not a url", "m");

        let error = client.generate_url(&target).unwrap_err();

        assert!(!error.is_network());
        assert!(!error.to_string().contains("test-key"));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let client = GeminiClient::new(MockHttpClient::new(), "SECRET-KEY-123");

        assert!(!format!("{:?}", client).contains("SECRET-KEY-123"));
    }

    #[tokio::test]
    async fn test_unreachable_provider_error_hides_api_key() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = GeminiClient::new(HttpClient::new().unwrap(), "SECRET-KEY-123");
        let target = ProviderTarget::new(format!("http://{}/v1beta/models", addr), "m");
        let invoker = RetryingInvoker::new(client, vec![target], RetryPolicy::new(1));

        let error = invoker.invoke("hello").await.unwrap_err();

        assert!(matches!(error, InvokerError::ExhaustedRetries { attempts: 1, .. }));
        assert!(!error.to_string().contains("SECRET-KEY-123"));
        assert!(!format!("{:?}", error).contains("SECRET-KEY-123"));
    }

    #[tokio::test]
    async fn test_generate_against_server() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-1.5-pro:generateContent"))
            .and(query_param("key", "abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": "ok"}]}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let target = ProviderTarget::new(format!("{}/v1beta/models/", server.uri()), "gemini-1.5-pro");
        let client = GeminiClient::new(HttpClient::new().unwrap(), "abc");

        let reply = client.generate(&target, "hello").await.unwrap();

        assert_eq!(reply.text.as_deref(), Some("ok"));
    }
}
