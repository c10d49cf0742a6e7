use serde::{Deserialize, Serialize};

/// One (endpoint, model) pair in the failover list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderTarget {
    pub endpoint: String,
    pub model: String,
}

impl ProviderTarget {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }
}

impl std::fmt::Display for ProviderTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.endpoint, self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trailing_slash_trimmed() {
        let target = ProviderTarget::new("https://example.com/v1beta/models/", "gemini-1.5-flash");

        assert_eq!(target.endpoint, "https://example.com/v1beta/models");
        assert_eq!(
            target.to_string(),
            "https://example.com/v1beta/models/gemini-1.5-flash"
        );
    }
}
