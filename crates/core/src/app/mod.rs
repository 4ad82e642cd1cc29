mod config;
mod logging;

use std::sync::{Arc, Mutex};

pub use config::*;
pub use logging::{init_log, set_log_level};
use log::warn;

use crate::{
    persistence::{MemoryStore, SecureStoreBackend},
    storage::{SecureStateStorage, SecureStorage, TokenStore},
};

/// A configuration interface for building an [AppCore].
///
/// Without [AppCoreBuilder::set_secure_store] the core falls back to an
/// in-memory store, which is fine for previews and tests but loses the
/// session on every launch.
#[derive(uniffi::Object, Default)]
pub struct AppCoreBuilder {
    config: Mutex<CoreConfiguration>,
}

#[uniffi::export]
impl AppCoreBuilder {
    #[uniffi::constructor]
    pub fn new() -> Self {
        Self {
            config: Default::default(),
        }
    }

    /// Provides the platform secure store (Keychain, Keystore, ...) that
    /// tokens and persisted state are written to.
    pub fn set_secure_store(&self, store: Arc<dyn SecureStoreBackend>) {
        let mut config = self.config.lock().unwrap();
        config.secure_store = Some(store);
    }

    /// Set the log filter level.
    ///
    /// By Default the log filter is set to [LogLevel::Info]
    pub fn set_log_level(&self, level: LogLevel) {
        let mut config = self.config.lock().unwrap();
        config.log_level = level;
    }

    /// Returns the current log level setting.
    pub fn log_level(&self) -> LogLevel {
        let config = self.config.lock().unwrap();
        config.log_level
    }

    pub fn build(&self) -> AppCore {
        let config = self.config.lock().unwrap().clone();
        AppCore::new(config)
    }
}

/// Hands out the storage facades, all sharing one backend.
#[derive(uniffi::Object, Debug)]
pub struct AppCore {
    storage: SecureStorage,
}

impl AppCore {
    pub fn new(config: CoreConfiguration) -> Self {
        init_log(config.log_level);
        set_log_level(config.log_level);

        let backend = match config.secure_store {
            Some(store) => store,
            None => {
                warn!("No secure store provided - tokens and state will not persist");
                Arc::new(MemoryStore::new()) as Arc<dyn SecureStoreBackend>
            }
        };

        Self {
            storage: SecureStorage::new(backend),
        }
    }
}

#[uniffi::export]
impl AppCore {
    pub fn secure_storage(&self) -> Arc<SecureStorage> {
        Arc::new(self.storage.clone())
    }

    pub fn state_storage(&self) -> Arc<SecureStateStorage> {
        Arc::new(self.storage.clone().into())
    }

    pub fn token_store(&self) -> Arc<TokenStore> {
        Arc::new(self.storage.clone().into())
    }
}
