use std::sync::Arc;

use log::{debug, warn};
use serde::{de::DeserializeOwned, Serialize};

use crate::{error::StorageError, persistence::SecureStoreBackend};

/// Outcome of reading a JSON object back out of the store.
#[derive(Debug)]
pub enum StoredObject<T> {
    /// Nothing is stored under the key.
    Missing,
    /// Something is stored but it does not deserialize into `T`.
    Corrupted(serde_json::Error),
    Value(T),
}

impl<T> StoredObject<T> {
    /// Collapses [StoredObject::Corrupted] into absence.
    pub fn into_option(self) -> Option<T> {
        match self {
            StoredObject::Value(value) => Some(value),
            StoredObject::Missing | StoredObject::Corrupted(_) => None,
        }
    }
}

/// Typed access to a [SecureStoreBackend]: raw strings plus a JSON object layer.
#[derive(uniffi::Object, Clone)]
pub struct SecureStorage {
    backend: Arc<dyn SecureStoreBackend>,
}

#[uniffi::export]
impl SecureStorage {
    #[uniffi::constructor]
    pub fn new(backend: Arc<dyn SecureStoreBackend>) -> Self {
        Self { backend }
    }

    /// Returns the string stored under `key`, or None if it was never set.
    pub async fn get_string(&self, key: String) -> Result<Option<String>, StorageError> {
        debug!("get {key}");
        self.backend.get_item(key).await
    }

    pub async fn set_string(&self, key: String, value: String) -> Result<(), StorageError> {
        debug!("set {key}");
        self.backend.set_item(key, value).await
    }

    /// Deletes the entry. Removing a key that holds nothing succeeds.
    pub async fn remove(&self, key: String) -> Result<(), StorageError> {
        debug!("remove {key}");
        self.backend.delete_item(key).await
    }
}

impl SecureStorage {
    /// Reads and deserializes the JSON stored under `key`.
    ///
    /// Unparsable data is reported as absent, see [SecureStorage::read_object] when the
    /// difference matters.
    pub async fn get_object<T: DeserializeOwned>(
        &self,
        key: String,
    ) -> Result<Option<T>, StorageError> {
        let stored = self.read_object(key.clone()).await?;
        if let StoredObject::Corrupted(e) = &stored {
            warn!("Failed to load {key}: {e} - treating as missing");
        }
        Ok(stored.into_option())
    }

    pub async fn read_object<T: DeserializeOwned>(
        &self,
        key: String,
    ) -> Result<StoredObject<T>, StorageError> {
        let Some(raw) = self.get_string(key).await? else {
            return Ok(StoredObject::Missing);
        };

        Ok(match serde_json::from_str(&raw) {
            Ok(value) => StoredObject::Value(value),
            Err(e) => StoredObject::Corrupted(e),
        })
    }

    pub async fn set_object<T: Serialize + ?Sized>(
        &self,
        key: String,
        value: &T,
    ) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)?;
        self.set_string(key, json).await
    }
}

impl std::fmt::Debug for SecureStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureStorage").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    use super::*;
    use crate::persistence::MemoryStore;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Profile {
        name: String,
        age: u32,
        tags: Vec<String>,
        extra: BTreeMap<String, Option<bool>>,
    }

    fn storage() -> SecureStorage {
        SecureStorage::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_string_roundtrip() {
        let storage = storage();
        for value in ["", "plain", "with spaces and ünïcödé", "{\"looks\":\"like json\"}"] {
            storage
                .set_string("key".into(), value.to_owned())
                .await
                .unwrap();
            assert_eq!(
                storage.get_string("key".into()).await.unwrap().as_deref(),
                Some(value)
            );
        }
    }

    #[tokio::test]
    async fn test_object_roundtrip() {
        let storage = storage();
        let profile = Profile {
            name: "Ada".into(),
            age: 36,
            tags: vec!["admin".into(), "beta".into()],
            extra: BTreeMap::from([("dark_mode".into(), Some(true)), ("sms".into(), None)]),
        };

        storage.set_object("profile".into(), &profile).await.unwrap();
        let loaded: Option<Profile> = storage.get_object("profile".into()).await.unwrap();
        assert_eq!(loaded, Some(profile));
    }

    #[tokio::test]
    async fn test_corrupted_object_is_absent() {
        let storage = storage();
        storage
            .set_string("profile".into(), "{not json".into())
            .await
            .unwrap();

        let loaded: Option<Profile> = storage.get_object("profile".into()).await.unwrap();
        assert!(loaded.is_none());

        let stored: StoredObject<Profile> = storage.read_object("profile".into()).await.unwrap();
        assert!(matches!(stored, StoredObject::Corrupted(_)));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_corrupted() {
        let storage = storage();
        storage.set_object("profile".into(), &vec![1, 2, 3]).await.unwrap();

        let stored: StoredObject<Profile> = storage.read_object("profile".into()).await.unwrap();
        assert!(matches!(stored, StoredObject::Corrupted(_)));
    }

    #[tokio::test]
    async fn test_missing_object() {
        let stored: StoredObject<Profile> = storage().read_object("nope".into()).await.unwrap();
        assert!(matches!(stored, StoredObject::Missing));
    }

    #[tokio::test]
    async fn test_remove_missing_key() {
        let storage = storage();
        storage.remove("never-set".into()).await.unwrap();
        assert_eq!(storage.get_string("never-set".into()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unserializable_object() {
        // JSON object keys must be strings.
        let value = BTreeMap::from([(vec![1u8], 1)]);
        let err = storage()
            .set_object("bad".into(), &value)
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Serialization { .. }));
    }
}
