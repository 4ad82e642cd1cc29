use std::sync::Arc;

use super::SecureStorage;
use crate::{error::StorageError, persistence::SecureStoreBackend};

/// The name/value contract expected by state persistence middleware.
/// Values are opaque strings, the middleware does its own serialization.
#[async_trait::async_trait]
pub trait StateStorage: Send + Sync {
    async fn get_item(&self, name: String) -> Result<Option<String>, StorageError>;

    async fn set_item(&self, name: String, value: String) -> Result<(), StorageError>;

    async fn remove_item(&self, name: String) -> Result<(), StorageError>;
}

/// [StateStorage] backed by the secure store, so persisted app state gets the
/// same protection as the auth tokens.
#[derive(uniffi::Object, Clone, Debug)]
pub struct SecureStateStorage {
    storage: SecureStorage,
}

#[uniffi::export]
impl SecureStateStorage {
    #[uniffi::constructor]
    pub fn new(backend: Arc<dyn SecureStoreBackend>) -> Self {
        Self {
            storage: SecureStorage::new(backend),
        }
    }

    pub async fn get_item(&self, name: String) -> Result<Option<String>, StorageError> {
        self.storage.get_string(name).await
    }

    pub async fn set_item(&self, name: String, value: String) -> Result<(), StorageError> {
        self.storage.set_string(name, value).await
    }

    pub async fn remove_item(&self, name: String) -> Result<(), StorageError> {
        self.storage.remove(name).await
    }
}

impl From<SecureStorage> for SecureStateStorage {
    fn from(storage: SecureStorage) -> Self {
        Self { storage }
    }
}

#[async_trait::async_trait]
impl StateStorage for SecureStateStorage {
    async fn get_item(&self, name: String) -> Result<Option<String>, StorageError> {
        SecureStateStorage::get_item(self, name).await
    }

    async fn set_item(&self, name: String, value: String) -> Result<(), StorageError> {
        SecureStateStorage::set_item(self, name, value).await
    }

    async fn remove_item(&self, name: String) -> Result<(), StorageError> {
        SecureStateStorage::remove_item(self, name).await
    }
}
