//! Persistent storage for the derived file key.
//!
//! The key lives in a single entry identified by a fixed service and
//! account name, stored as 64 lowercase hex characters.  There is one
//! key per installation.
//!
//! `KeyStore` is the capability callers receive; `OsKeyStore` backs it
//! with the operating system's credential store and `MemoryKeyStore`
//! stands in for it in tests or when the OS store is disabled.
//! `KeyStoreHandle` runs the (possibly slow) calls on tokio's blocking
//! pool so they can be awaited.

mod handle;
mod memory;
#[cfg(feature = "keyring-store")]
mod os;

pub use handle::KeyStoreHandle;
pub use memory::MemoryKeyStore;
#[cfg(feature = "keyring-store")]
pub use os::OsKeyStore;

use crate::crypto::SecretKey;
use crate::errors::Result;

/// Service name the key is stored under.
pub const SERVICE_NAME: &str = "my-secret-slide";

/// Account name the key is stored under.
pub const ACCOUNT_NAME: &str = "aes-key";

/// A place to keep the one file key between sessions.
///
/// Every call goes to the backing store; nothing is cached in process.
pub trait KeyStore: Send + Sync {
    /// Store `key`, replacing any previous one.
    fn save(&self, key: &SecretKey) -> Result<()>;

    /// Fetch the stored key, or `None` if nothing is stored.
    fn load(&self) -> Result<Option<SecretKey>>;

    /// Remove the stored key.  Succeeds when nothing is stored.
    fn clear(&self) -> Result<()>;
}

impl<S: KeyStore + ?Sized> KeyStore for std::sync::Arc<S> {
    fn save(&self, key: &SecretKey) -> Result<()> {
        (**self).save(key)
    }

    fn load(&self) -> Result<Option<SecretKey>> {
        (**self).load()
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}
