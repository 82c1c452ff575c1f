//! Awaitable access to a `KeyStore`.
//!
//! OS credential stores can block (unlock prompts, D-Bus round trips),
//! so each call runs on tokio's blocking pool.  Dropping a returned
//! future stops waiting for the result; the store call itself still
//! runs to completion as a single transaction, so no partial state is
//! left behind.

use std::sync::Arc;

use subtle::ConstantTimeEq;

use crate::crypto::SecretKey;
use crate::errors::{SecretSlideError, Result};

use super::KeyStore;

/// Cheaply cloneable, shareable handle to an injected `KeyStore`.
#[derive(Clone)]
pub struct KeyStoreHandle {
    store: Arc<dyn KeyStore>,
}

impl KeyStoreHandle {
    pub fn new<S: KeyStore + 'static>(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Store `key`, replacing any previous one.
    pub async fn save(&self, key: SecretKey) -> Result<()> {
        let store = Arc::clone(&self.store);
        run_blocking(move || store.save(&key)).await
    }

    /// Fetch the stored key, or `None` if nothing is stored.
    pub async fn load(&self) -> Result<Option<SecretKey>> {
        let store = Arc::clone(&self.store);
        run_blocking(move || store.load()).await
    }

    /// Remove the stored key.
    pub async fn clear(&self) -> Result<()> {
        let store = Arc::clone(&self.store);
        run_blocking(move || store.clear()).await
    }

    /// Whether `candidate` equals the stored key.
    ///
    /// Returns `false` when nothing is stored.  The comparison is
    /// constant-time.
    pub async fn matches(&self, candidate: &SecretKey) -> Result<bool> {
        Ok(match self.load().await? {
            Some(stored) => bool::from(stored.as_bytes()[..].ct_eq(&candidate.as_bytes()[..])),
            None => false,
        })
    }
}

async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| SecretSlideError::KeyStore(format!("key store task failed: {e}")))?
}
