use std::sync::Arc;

use crate::persistence::SecureStoreBackend;

#[derive(uniffi::Enum, Debug, Clone, Default, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

#[derive(Default, Clone)]
pub struct CoreConfiguration {
    /// The platform secure store tokens and persisted state are written to.
    /// When absent an in-memory store is used and nothing survives a restart.
    pub secure_store: Option<Arc<dyn SecureStoreBackend>>,
    /// Initial log level - defaults to [LogLevel::Info]
    pub log_level: LogLevel,
}

impl std::fmt::Debug for CoreConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoreConfiguration")
            .field("secure_store", &self.secure_store.is_some().then_some("..."))
            .field("log_level", &self.log_level)
            .finish()
    }
}
