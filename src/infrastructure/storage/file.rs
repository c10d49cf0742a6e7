//! JSON-file backed key-value store
//!
//! The whole store is a single JSON object of string values. Writes go to a
//! sibling temp file which is then renamed over the original.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::storage::KeyValueStore;
use crate::domain::DomainError;

type Entries = BTreeMap<String, String>;

#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Entries, DomainError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => {
                return Err(DomainError::storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        if raw.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&raw).map_err(|e| {
            DomainError::storage(format!("Corrupt store {}: {}", self.path.display(), e))
        })
    }

    async fn persist(&self, entries: &Entries) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                DomainError::storage(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| DomainError::storage(format!("Failed to encode store: {}", e)))?;

        let tmp = self.path.with_extension("tmp");
        write_private(&tmp, json.as_bytes()).await.map_err(|e| {
            DomainError::storage(format!("Failed to write {}: {}", tmp.display(), e))
        })?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(|e| {
            DomainError::storage(format!("Failed to replace {}: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), keys = entries.len(), "Persisted key-value store");
        Ok(())
    }
}

/// Writes `contents` readable and writable by the owner only (unix)
async fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    use tokio::io::AsyncWriteExt;

    let mut options = tokio::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options.open(path).await?;

    // mode() only applies on creation; a leftover temp file keeps its old bits
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o600))
            .await?;
    }

    file.write_all(contents).await?;
    file.sync_all().await
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.load().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<bool, DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.load().await?;
        if entries.remove(key).is_none() {
            return Ok(false);
        }

        self.persist(&entries).await?;
        Ok(true)
    }
}
