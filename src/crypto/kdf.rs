//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The salt is fixed and compiled in, so the same password always yields
//! the same key on every installation.  That lets the decrypt path
//! re-derive a key from the password alone, at the cost of sharing one
//! precomputation target across installations.
//!
//! An empty password is accepted.  It yields a valid but weak key; the
//! CLI is where password policy belongs, not here.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

use super::keys::{SecretKey, KEY_LEN};
use crate::errors::{SecretSlideError, Result};

/// Salt shared by every key this crate derives.
pub const FIXED_SALT: &[u8] = b"my-secret-slide-salt";

/// PBKDF2 iteration count used by `derive_key`.
pub const ITERATIONS: u32 = 100_000;

/// Derive the 32-byte file key for `password`.
///
/// Deterministic: the same password always produces the same key.
pub fn derive_key(password: &[u8]) -> SecretKey {
    let mut bytes = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password, FIXED_SALT, ITERATIONS, &mut bytes);
    SecretKey::new(bytes)
}

/// Derive a 32-byte key with an explicit salt and iteration count.
///
/// `derive_key` is this function with `FIXED_SALT` and `ITERATIONS`.
pub fn derive_key_with_params(password: &[u8], salt: &[u8], iterations: u32) -> Result<SecretKey> {
    if iterations < 1 {
        return Err(SecretSlideError::KeyDerivationFailed(
            "PBKDF2 iterations must be at least 1".into(),
        ));
    }

    let mut bytes = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password, salt, iterations, &mut bytes);
    Ok(SecretKey::new(bytes))
}
