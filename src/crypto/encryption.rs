//! AES-256-GCM authenticated encryption with a detached tag.
//!
//! Each call to `encrypt` generates a fresh random 12-byte IV.  The IV,
//! the 16-byte tag and the ciphertext are returned separately so the
//! envelope layer can frame them in its own order.
//!
//! No associated data is authenticated.

use aes_gcm::aead::{AeadInPlace, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce, Tag};
use zeroize::Zeroizing;

use super::keys::check_key;
use crate::errors::{SecretSlideError, Result};

/// Size of the AES-256-GCM IV in bytes.
pub const IV_LEN: usize = 12;

/// Size of the GCM authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// Output of one encryption: IV, tag and ciphertext kept apart.
#[derive(Debug, Clone)]
pub struct Sealed {
    pub iv: [u8; IV_LEN],
    pub tag: [u8; TAG_LEN],
    pub ciphertext: Vec<u8>,
}

/// Encrypt `plaintext` with a 32-byte `key` under a fresh random IV.
pub fn encrypt(key: &[u8], plaintext: &[u8]) -> Result<Sealed> {
    check_key(key)?;

    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| SecretSlideError::EncryptionFailed(format!("invalid key length: {e}")))?;

    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let mut buffer = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(&nonce, b"", &mut buffer)
        .map_err(|e| SecretSlideError::EncryptionFailed(format!("encryption error: {e}")))?;

    let mut iv = [0u8; IV_LEN];
    iv.copy_from_slice(&nonce);
    let mut tag_bytes = [0u8; TAG_LEN];
    tag_bytes.copy_from_slice(&tag);

    Ok(Sealed {
        iv,
        tag: tag_bytes,
        ciphertext: buffer,
    })
}

/// Decrypt `ciphertext` and verify `tag`.
///
/// The plaintext is only returned once the tag has verified.  On any
/// failure the working buffer is wiped and `AuthenticationFailed` is
/// returned without further detail.
pub fn decrypt(
    key: &[u8],
    iv: &[u8; IV_LEN],
    tag: &[u8; TAG_LEN],
    ciphertext: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    check_key(key)?;

    let cipher =
        Aes256Gcm::new_from_slice(key).map_err(|_| SecretSlideError::AuthenticationFailed)?;

    let mut buffer = Zeroizing::new(ciphertext.to_vec());
    cipher
        .decrypt_in_place_detached(
            Nonce::from_slice(iv),
            b"",
            &mut buffer,
            Tag::from_slice(tag),
        )
        .map_err(|_| SecretSlideError::AuthenticationFailed)?;

    Ok(buffer)
}
