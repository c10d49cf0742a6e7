use serde::Serialize;
use thiserror::Error;

/// Which side of the wire rejected a call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Remote service reachable, rejected the request
    Application,
    /// Remote service unreachable or timed out
    Network,
}

/// Classified failure of a single outbound call
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    #[error("{message}")]
    Application {
        status: Option<u16>,
        message: String,
        body: Option<serde_json::Value>,
    },

    #[error("{message}")]
    Network { message: String },
}

impl TransportError {
    pub fn application(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Application {
            status,
            message: message.into(),
            body: None,
        }
    }

    /// Non-success status with an optional JSON error body
    ///
    /// The message is the body's `detail` string when present.
    pub fn from_status(status: u16, body: Option<serde_json::Value>) -> Self {
        let message = body
            .as_ref()
            .and_then(|b| b.get("detail"))
            .and_then(|d| d.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed with status code {}", status));

        Self::Application {
            status: Some(status),
            message,
            body,
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            TransportError::Application { .. } => FailureKind::Application,
            TransportError::Network { .. } => FailureKind::Network,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Application { status, .. } => *status,
            TransportError::Network { .. } => None,
        }
    }

    pub fn body(&self) -> Option<&serde_json::Value> {
        match self {
            TransportError::Application { body, .. } => body.as_ref(),
            TransportError::Network { .. } => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            TransportError::Application { message, .. } => message,
            TransportError::Network { message } => message,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, TransportError::Network { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_error_uses_detail() {
        let error = TransportError::from_status(422, Some(json!({"detail": "journal is required"})));

        assert_eq!(error.kind(), FailureKind::Application);
        assert_eq!(error.status(), Some(422));
        assert_eq!(error.to_string(), "journal is required");
    }

    #[test]
    fn test_status_error_without_detail() {
        let error = TransportError::from_status(500, Some(json!({"error": "boom"})));
        assert_eq!(error.to_string(), "Request failed with status code 500");

        let error = TransportError::from_status(502, None);
        assert_eq!(error.to_string(), "Request failed with status code 502");
    }

    #[test]
    fn test_network_error() {
        let error = TransportError::network("Cannot connect to backend");

        assert!(error.is_network());
        assert_eq!(error.kind(), FailureKind::Network);
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_failure_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&FailureKind::Network).unwrap(),
            "\"network\""
        );
    }
}
