use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use thiserror::Error;

use business::domain::shared::value_objects::ListId;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage.read_error")]
    ReadError,
    #[error("storage.write_error")]
    WriteError,
}

/// The opaque key-value collaborator every repository writes through.
/// `get` distinguishes an absent key from a failed read.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Fixed keys of the persisted documents. Immutable configuration, passed
/// into the repository constructors.
#[derive(Debug, Clone)]
pub struct StorageKeys {
    /// Key of the whole list collection.
    pub lists_key: String,
    /// Prefix of the per-list item documents; the list id completes the key.
    pub items_key_prefix: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            lists_key: "@shopping_lists".to_string(),
            items_key_prefix: "@shopping_list_items_".to_string(),
        }
    }
}

impl StorageKeys {
    /// Key of one list's item document, derived deterministically from the
    /// list id.
    pub fn items_key(&self, list_id: &ListId) -> String {
        format!("{}{}", self.items_key_prefix, list_id)
    }
}

/// Ephemeral adapter backed by a mutex-guarded map. Used in tests and for
/// throwaway sessions.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

#[async_trait]
impl KeyValueStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::ReadError)?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::WriteError)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One file per key under a base directory, the local-device analog of a
/// platform key-value store.
pub struct FileStorage {
    base_dir: PathBuf,
}

impl FileStorage {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    // Keys carry characters that are not filesystem-safe ('@', '/').
    fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base_dir.join(format!("{file_name}.json"))
    }
}

#[async_trait]
impl KeyValueStorage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(_) => Err(StorageError::ReadError),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|_| StorageError::WriteError)?;
        tokio::fs::write(self.path_for(key), value)
            .await
            .map_err(|_| StorageError::WriteError)
    }
}
