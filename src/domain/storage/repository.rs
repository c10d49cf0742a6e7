//! Key-value store trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

/// Client-local persistent key-value store
///
/// Values are opaque strings; callers own their encoding.
#[async_trait]
pub trait KeyValueStore: Send + Sync + Debug {
    /// Reads a value, `None` when the key is absent
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Writes a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError>;

    /// Removes a key, returns true if it existed
    async fn remove(&self, key: &str) -> Result<bool, DomainError>;

    /// Checks if a key exists
    async fn contains(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.get(key).await?.is_some())
    }
}
