/// HTTP verbs used by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Description of one logical request; immutable once built
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    path: String,
    method: HttpMethod,
    body: Option<serde_json::Value>,
    headers: Vec<(String, String)>,
}

impl RequestDescriptor {
    pub fn get(path: impl Into<String>) -> Self {
        Self::builder(HttpMethod::Get, path).build()
    }

    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self::builder(HttpMethod::Post, path).body(body).build()
    }

    pub fn builder(method: HttpMethod, path: impl Into<String>) -> RequestDescriptorBuilder {
        RequestDescriptorBuilder::new(method, path)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

/// Builder for RequestDescriptor
#[derive(Debug)]
pub struct RequestDescriptorBuilder {
    path: String,
    method: HttpMethod,
    body: Option<serde_json::Value>,
    headers: Vec<(String, String)>,
    query: Vec<(String, String)>,
}

impl RequestDescriptorBuilder {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            body: None,
            headers: Vec::new(),
            query: Vec::new(),
        }
    }

    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    pub fn build(self) -> RequestDescriptor {
        let path = if self.query.is_empty() {
            self.path
        } else {
            let query = self
                .query
                .iter()
                .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
                .collect::<Vec<_>>()
                .join("&");
            format!("{}?{}", self.path, query)
        };

        RequestDescriptor {
            path,
            method: self.method,
            body: self.body,
            headers: self.headers,
        }
    }
}

fn encode_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());

    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }

    encoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_has_no_body() {
        let request = RequestDescriptor::get("/health");

        assert_eq!(request.method(), HttpMethod::Get);
        assert_eq!(request.path(), "/health");
        assert!(request.body().is_none());
        assert!(request.headers().is_empty());
    }

    #[test]
    fn test_post_with_body_and_header() {
        let request = RequestDescriptor::builder(HttpMethod::Post, "/ai/analyze-entry")
            .body(json!({"journal": "hello"}))
            .header("X-Client", "cli")
            .build();

        assert_eq!(request.body(), Some(&json!({"journal": "hello"})));
        assert_eq!(
            request.headers(),
            &[("X-Client".to_string(), "cli".to_string())]
        );
    }

    #[test]
    fn test_query_parameters_are_encoded() {
        let request = RequestDescriptor::builder(HttpMethod::Get, "/analytics/mood-series")
            .query("user_id", "ana maria")
            .query("days", 14)
            .build();

        assert_eq!(
            request.path(),
            "/analytics/mood-series?user_id=ana%20maria&days=14"
        );
    }
}
