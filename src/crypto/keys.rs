//! The `SecretKey` type: 32 bytes of AES-256 key material.
//!
//! A `SecretKey` zeroes its memory when dropped and never prints its
//! bytes through `Debug`.  The only serialized form is the lowercase hex
//! string handed to the key store.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::errors::{SecretSlideError, Result};

/// Length of a file key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// Length of the hex encoding of a key.
pub const KEY_HEX_LEN: usize = KEY_LEN * 2;

/// A 32-byte symmetric key, wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    bytes: [u8; KEY_LEN],
}

impl SecretKey {
    /// Wrap raw key bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Build a key from a byte slice.
    ///
    /// An empty slice is `MissingKey`; any other length mismatch is
    /// `InvalidKeyLength`.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        check_key(bytes)?;
        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(bytes);
        Ok(Self::new(key))
    }

    /// Decode the 64-character hex form produced by `to_hex`.
    pub fn from_hex(encoded: &str) -> Result<Self> {
        if encoded.len() != KEY_HEX_LEN {
            return Err(SecretSlideError::KeyStore(format!(
                "stored key must be {KEY_HEX_LEN} hex characters (got {})",
                encoded.len()
            )));
        }
        let mut bytes = [0u8; KEY_LEN];
        hex::decode_to_slice(encoded, &mut bytes)
            .map_err(|e| SecretSlideError::KeyStore(format!("stored key is not valid hex: {e}")))?;
        Ok(Self::new(bytes))
    }

    /// Lowercase hex encoding, wiped when the returned string is dropped.
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(self.bytes))
    }

    /// Access the raw key bytes (e.g. to pass to the cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey([REDACTED])")
    }
}

/// Validate raw key material before it reaches the cipher.
pub fn check_key(key: &[u8]) -> Result<()> {
    match key.len() {
        0 => Err(SecretSlideError::MissingKey),
        KEY_LEN => Ok(()),
        n => Err(SecretSlideError::InvalidKeyLength(n)),
    }
}
