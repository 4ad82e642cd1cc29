use std::sync::Arc;

use futures::future::join;
use log::warn;
use serde::{Deserialize, Serialize};

use super::SecureStorage;
use crate::{error::StorageError, persistence::SecureStoreBackend};

const ACCESS_TOKEN: &str = "ACCESS_TOKEN";
const REFRESH_TOKEN: &str = "REFRESH_TOKEN";

/// The keys tokens are stored under. The string values must not change,
/// installed apps already have data under them.
#[derive(uniffi::Enum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKey {
    AccessToken,
    RefreshToken,
}

impl TokenKey {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TokenKey::AccessToken => ACCESS_TOKEN,
            TokenKey::RefreshToken => REFRESH_TOKEN,
        }
    }
}

impl std::fmt::Display for TokenKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Both tokens as read from the store. Either may be missing on its own.
#[derive(uniffi::Record, Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub token: Option<String>,
    pub refresh_token: Option<String>,
}

/// Reads and writes the access/refresh token pair.
///
/// The paired operations issue both backend calls at once and wait for both.
/// They are not atomic: when one half fails the other may already be applied,
/// and the first error is returned.
#[derive(uniffi::Object, Clone, Debug)]
pub struct TokenStore {
    storage: SecureStorage,
}

#[uniffi::export]
impl TokenStore {
    #[uniffi::constructor]
    pub fn new(backend: Arc<dyn SecureStoreBackend>) -> Self {
        Self {
            storage: SecureStorage::new(backend),
        }
    }

    pub async fn get_token(&self) -> Result<Option<String>, StorageError> {
        self.get(TokenKey::AccessToken).await
    }

    pub async fn set_token(&self, token: String) -> Result<(), StorageError> {
        self.set(TokenKey::AccessToken, token).await
    }

    pub async fn remove_token(&self) -> Result<(), StorageError> {
        self.remove(TokenKey::AccessToken).await
    }

    pub async fn get_refresh_token(&self) -> Result<Option<String>, StorageError> {
        self.get(TokenKey::RefreshToken).await
    }

    pub async fn set_refresh_token(&self, refresh_token: String) -> Result<(), StorageError> {
        self.set(TokenKey::RefreshToken, refresh_token).await
    }

    pub async fn remove_refresh_token(&self) -> Result<(), StorageError> {
        self.remove(TokenKey::RefreshToken).await
    }

    pub async fn set_tokens(&self, token: String, refresh_token: String) -> Result<(), StorageError> {
        let results = join(self.set_token(token), self.set_refresh_token(refresh_token)).await;
        settle("set_tokens", results)
    }

    pub async fn clear_tokens(&self) -> Result<(), StorageError> {
        let results = join(self.remove_token(), self.remove_refresh_token()).await;
        settle("clear_tokens", results)
    }

    pub async fn get_tokens(&self) -> Result<TokenPair, StorageError> {
        let (token, refresh_token) = join(self.get_token(), self.get_refresh_token()).await;
        Ok(TokenPair {
            token: token?,
            refresh_token: refresh_token?,
        })
    }
}

impl TokenStore {
    pub async fn get(&self, key: TokenKey) -> Result<Option<String>, StorageError> {
        self.storage.get_string(key.to_string()).await
    }

    pub async fn set(&self, key: TokenKey, value: String) -> Result<(), StorageError> {
        self.storage.set_string(key.to_string(), value).await
    }

    pub async fn remove(&self, key: TokenKey) -> Result<(), StorageError> {
        self.storage.remove(key.to_string()).await
    }
}

impl From<SecureStorage> for TokenStore {
    fn from(storage: SecureStorage) -> Self {
        Self { storage }
    }
}

fn settle(
    op: &str,
    results: (Result<(), StorageError>, Result<(), StorageError>),
) -> Result<(), StorageError> {
    match results {
        (Ok(()), Ok(())) => Ok(()),
        (Err(e), Ok(())) | (Ok(()), Err(e)) => {
            warn!("{op}: only one of the token pair was applied - {e}");
            Err(e)
        }
        (Err(e), Err(_)) => Err(e),
    }
}
