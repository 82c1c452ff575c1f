//! In-memory key store.
//!
//! Keeps the hex-encoded key the same way the OS store does, so the
//! encode/decode path is exercised.  Data is lost on drop.

use std::sync::Mutex;

use zeroize::Zeroizing;

use crate::crypto::SecretKey;
use crate::errors::{SecretSlideError, Result};

use super::KeyStore;

/// `KeyStore` that lives only as long as the process.
#[derive(Default)]
pub struct MemoryKeyStore {
    secret: Mutex<Option<Zeroizing<String>>>,
}

impl MemoryKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> Result<std::sync::MutexGuard<'_, Option<Zeroizing<String>>>> {
        self.secret
            .lock()
            .map_err(|_| SecretSlideError::KeyStore("memory key store lock poisoned".into()))
    }
}

impl KeyStore for MemoryKeyStore {
    fn save(&self, key: &SecretKey) -> Result<()> {
        *self.slot()? = Some(key.to_hex());
        Ok(())
    }

    fn load(&self) -> Result<Option<SecretKey>> {
        match self.slot()?.as_ref() {
            Some(encoded) => SecretKey::from_hex(encoded).map(Some),
            None => Ok(None),
        }
    }

    fn clear(&self) -> Result<()> {
        self.slot()?.take();
        Ok(())
    }
}
