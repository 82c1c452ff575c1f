//! OS keyring backend.
//!
//! Stores the key in the operating system's secure credential store:
//! - macOS: Keychain
//! - Windows: Credential Manager
//! - Linux: kernel keyutils
//!
//! The Linux keyutils store lives in the kernel's session/user keyrings
//! and does not survive a reboot, so on Linux a saved key lasts until
//! logout or restart rather than indefinitely.
//!
//! Failures are returned to the caller, which decides whether to fall
//! back to a password prompt.

use crate::crypto::SecretKey;
use crate::errors::{SecretSlideError, Result};

use super::{KeyStore, ACCOUNT_NAME, SERVICE_NAME};

/// `KeyStore` backed by the `keyring` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsKeyStore;

impl OsKeyStore {
    pub fn new() -> Self {
        Self
    }

    fn entry(&self) -> Result<keyring::Entry> {
        keyring::Entry::new(SERVICE_NAME, ACCOUNT_NAME).map_err(|e| {
            SecretSlideError::KeyStore(format!("failed to create keyring entry: {e}"))
        })
    }
}

impl KeyStore for OsKeyStore {
    fn save(&self, key: &SecretKey) -> Result<()> {
        self.entry()?.set_password(&key.to_hex()).map_err(|e| {
            SecretSlideError::KeyStore(format!("failed to store key in keyring: {e}"))
        })
    }

    fn load(&self) -> Result<Option<SecretKey>> {
        match self.entry()?.get_password() {
            Ok(encoded) => {
                let encoded = zeroize::Zeroizing::new(encoded);
                SecretKey::from_hex(&encoded).map(Some)
            }
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(SecretSlideError::KeyStore(format!(
                "failed to read from keyring: {e}"
            ))),
        }
    }

    fn clear(&self) -> Result<()> {
        match self.entry()?.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()), // Already gone, that's fine.
            Err(e) => Err(SecretSlideError::KeyStore(format!(
                "failed to delete from keyring: {e}"
            ))),
        }
    }
}
