use std::sync::{Arc, RwLock};

use tracing::{debug, info};

use crate::domain::credentials::{Credential, CREDENTIAL_STORAGE_KEY};
use crate::domain::storage::KeyValueStore;
use crate::domain::DomainError;

/// Holds the single active credential and mirrors it into persistent storage
///
/// Reads are served from memory. `set` replaces the credential, `clear`
/// removes it; both write through to the backing store.
#[derive(Debug)]
pub struct CredentialStore {
    current: RwLock<Option<Credential>>,
    storage: Arc<dyn KeyValueStore>,
    key: String,
}

impl CredentialStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(storage, CREDENTIAL_STORAGE_KEY)
    }

    pub fn with_key(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            current: RwLock::new(None),
            storage,
            key: key.into(),
        }
    }

    /// Loads the persisted credential into memory
    ///
    /// A blank stored value counts as absent.
    pub async fn restore(&self) -> Result<Option<Credential>, DomainError> {
        let restored = self
            .storage
            .get(&self.key)
            .await?
            .and_then(|token| Credential::new(token).ok());

        debug!(present = restored.is_some(), "Restored credential");
        self.replace(restored.clone())?;

        Ok(restored)
    }

    pub fn current(&self) -> Option<Credential> {
        self.current.read().ok().and_then(|guard| guard.clone())
    }

    pub async fn set(&self, credential: Credential) -> Result<(), DomainError> {
        self.replace(Some(credential.clone()))?;
        self.storage.set(&self.key, credential.token()).await?;

        info!("Credential stored");
        Ok(())
    }

    pub async fn clear(&self) -> Result<(), DomainError> {
        self.replace(None)?;
        self.storage.remove(&self.key).await?;

        info!("Credential cleared");
        Ok(())
    }

    fn replace(&self, credential: Option<Credential>) -> Result<(), DomainError> {
        let mut guard = self
            .current
            .write()
            .map_err(|_| DomainError::credential("Credential lock poisoned"))?;
        *guard = credential;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryKeyValueStore;

    fn credential(token: &str) -> Credential {
        Credential::new(token).unwrap()
    }

    #[tokio::test]
    async fn test_absent_at_cold_start() {
        let store = CredentialStore::new(Arc::new(InMemoryKeyValueStore::new()));

        assert!(store.current().is_none());
        assert!(store.restore().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_mirrors_to_storage() {
        let storage = Arc::new(InMemoryKeyValueStore::new());
        let store = CredentialStore::new(storage.clone());

        store.set(credential("tok-1")).await.unwrap();

        assert_eq!(store.current(), Some(credential("tok-1")));
        assert_eq!(storage.get("auth_token").await.unwrap().as_deref(), Some("tok-1"));
    }

    #[tokio::test]
    async fn test_set_replaces_previous() {
        let storage = Arc::new(InMemoryKeyValueStore::new());
        let store = CredentialStore::new(storage.clone());

        store.set(credential("tok-1")).await.unwrap();
        store.set(credential("tok-2")).await.unwrap();

        assert_eq!(store.current().unwrap().token(), "tok-2");
        assert_eq!(storage.get("auth_token").await.unwrap().as_deref(), Some("tok-2"));
    }

    #[tokio::test]
    async fn test_clear_removes_from_storage() {
        let storage = Arc::new(InMemoryKeyValueStore::new());
        let store = CredentialStore::new(storage.clone());
        store.set(credential("tok-1")).await.unwrap();

        store.clear().await.unwrap();

        assert!(store.current().is_none());
        assert!(!storage.contains("auth_token").await.unwrap());
    }

    #[tokio::test]
    async fn test_restore_after_reload() {
        let storage = Arc::new(InMemoryKeyValueStore::with_entries([("auth_token", "persisted")]));
        let store = CredentialStore::new(storage);

        let restored = store.restore().await.unwrap();

        assert_eq!(restored.unwrap().token(), "persisted");
        assert_eq!(store.current().unwrap().token(), "persisted");
    }

    #[tokio::test]
    async fn test_restore_ignores_blank_value() {
        let storage = Arc::new(InMemoryKeyValueStore::with_entries([("auth_token", "   ")]));
        let store = CredentialStore::new(storage);

        assert!(store.restore().await.unwrap().is_none());
    }
}
