use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::{RequestDescriptor, TransportError};

/// Performs exactly one call and classifies its outcome
///
/// Implementations never retry and know nothing about fallback policy.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &RequestDescriptor) -> Result<serde_json::Value, TransportError>;
}
