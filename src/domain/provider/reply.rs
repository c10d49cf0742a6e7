use serde::{Deserialize, Serialize};

/// Structured error reported by the provider, in-body or with a non-2xx status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl ProviderErrorBody {
    /// Extracts the `error` object from a provider response body
    pub fn from_body(body: &serde_json::Value) -> Option<Self> {
        body.get("error")
            .and_then(|error| serde_json::from_value(error.clone()).ok())
    }

    /// Transient capacity exhaustion
    ///
    /// Structured code/status are authoritative; the message text is only
    /// consulted when neither is present.
    pub fn is_overload(&self) -> bool {
        if self.code == Some(503) || self.status.as_deref() == Some("UNAVAILABLE") {
            return true;
        }

        if self.code.is_some() || self.status.is_some() {
            return false;
        }

        self.message.to_lowercase().contains("overloaded")
    }
}

/// Parsed 2xx provider response
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProviderReply {
    pub text: Option<String>,
    pub error: Option<ProviderErrorBody>,
}

impl ProviderReply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            error: None,
        }
    }

    pub fn error(error: ProviderErrorBody) -> Self {
        Self {
            text: None,
            error: Some(error),
        }
    }
}
