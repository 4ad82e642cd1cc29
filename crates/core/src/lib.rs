pub mod app;
pub mod constants;
pub mod error;
pub mod ffi;
pub mod path;
pub mod persistence;
pub mod storage;
pub mod utils;

pub use self::{
    app::{AppCore, AppCoreBuilder, CoreConfiguration, LogLevel},
    error::StorageError,
    persistence::{MemoryStore, SecureStoreBackend},
    storage::{SecureStateStorage, SecureStorage, StateStorage, TokenKey, TokenPair, TokenStore},
};

uniffi::setup_scaffolding!();
