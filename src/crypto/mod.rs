//! Cryptographic primitives for SecretSlide.
//!
//! This module provides:
//! - AES-256-GCM encryption and decryption with a detached tag (`encryption`)
//! - PBKDF2-HMAC-SHA256 password-based key derivation (`kdf`)
//! - The zeroizing `SecretKey` type and its hex form (`keys`)

pub mod encryption;
pub mod kdf;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{derive_key, SecretKey, ...};
pub use encryption::{decrypt, encrypt, Sealed, IV_LEN, TAG_LEN};
pub use kdf::{derive_key, derive_key_with_params, FIXED_SALT, ITERATIONS};
pub use keys::{SecretKey, KEY_LEN};
