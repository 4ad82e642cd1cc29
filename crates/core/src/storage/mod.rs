mod secure;
mod state;
mod token;

pub use secure::{SecureStorage, StoredObject};
pub use state::{SecureStateStorage, StateStorage};
pub use token::{TokenKey, TokenPair, TokenStore};
