use std::{collections::HashMap, sync::Mutex};

use crate::error::StorageError;

/// Provides secure persistent storage for session data like auth tokens.
/// Implementations should handle platform-specific storage (e.g. the Keychain on iOS,
/// the Keystore on Android) and ensure data is stored securely.
///
/// Every call is a fresh round-trip, callers never cache what they read.
#[uniffi::export(with_foreign)]
#[async_trait::async_trait]
pub trait SecureStoreBackend: Send + Sync {
    /// Gets the value for the given key, or None if not found
    async fn get_item(&self, key: String) -> Result<Option<String>, StorageError>;

    /// Sets the value for the given key, replacing any previous value
    async fn set_item(&self, key: String, value: String) -> Result<(), StorageError>;

    /// Removes the entry for the given key. Removing a missing key is not an error.
    async fn delete_item(&self, key: String) -> Result<(), StorageError>;
}

/// A process-local backend. Nothing written here survives a restart.
#[derive(Default, uniffi::Object)]
pub struct MemoryStore(Mutex<HashMap<String, String>>);

#[uniffi::export]
impl MemoryStore {
    #[uniffi::constructor]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held.
    pub fn len(&self) -> u64 {
        self.0.lock().map(|map| map.len() as u64).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MemoryStore {
    fn entries(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.0.lock().map_err(StorageError::backend)
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("entries", &self.len())
            .finish()
    }
}

#[async_trait::async_trait]
impl SecureStoreBackend for MemoryStore {
    async fn get_item(&self, key: String) -> Result<Option<String>, StorageError> {
        Ok(self.entries()?.get(&key).cloned())
    }

    async fn set_item(&self, key: String, value: String) -> Result<(), StorageError> {
        self.entries()?.insert(key, value);
        Ok(())
    }

    async fn delete_item(&self, key: String) -> Result<(), StorageError> {
        self.entries()?.remove(&key);
        Ok(())
    }
}
