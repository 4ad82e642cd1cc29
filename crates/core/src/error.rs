#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum StorageError {
    /// The platform store rejected the call (permissions, quota, locked keychain, ...).
    #[error("Secure Store Error - {error}")]
    Backend { error: String },

    #[error("Serialization Error - {error}")]
    Serialization { error: String },
}

impl StorageError {
    pub fn backend(error: impl ToString) -> Self {
        Self::Backend {
            error: error.to_string(),
        }
    }
}

// Foreign implementations of the backend that throw something other than
// a StorageError land here.
impl From<uniffi::UnexpectedUniFFICallbackError> for StorageError {
    fn from(value: uniffi::UnexpectedUniFFICallbackError) -> Self {
        Self::Backend {
            error: value.reason,
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization {
            error: value.to_string(),
        }
    }
}
