//! In-memory key-value store

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::storage::KeyValueStore;
use crate::domain::DomainError;

/// Thread-safe in-memory store
///
/// Data is lost when the process terminates.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with entries
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        Self {
            entries: RwLock::new(map),
        }
    }
}

fn poisoned() -> DomainError {
    DomainError::storage("In-memory store lock poisoned")
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool, DomainError> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        Ok(entries.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let store = InMemoryKeyValueStore::new();

        store.set("auth_token", "abc").await.unwrap();

        assert_eq!(store.get("auth_token").await.unwrap(), Some("abc".to_string()));
        assert!(store.contains("auth_token").await.unwrap());
    }

    #[tokio::test]
    async fn test_set_replaces_value() {
        let store = InMemoryKeyValueStore::with_entries([("auth_token", "old")]);

        store.set("auth_token", "new").await.unwrap();

        assert_eq!(store.get("auth_token").await.unwrap().as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn test_remove() {
        let store = InMemoryKeyValueStore::with_entries([("auth_token", "abc")]);

        assert!(store.remove("auth_token").await.unwrap());
        assert!(!store.remove("auth_token").await.unwrap());
        assert_eq!(store.get("auth_token").await.unwrap(), None);
    }
}
