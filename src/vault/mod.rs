//! Vault module — encrypted file containers.
//!
//! This module provides:
//! - `FileMetadata` and the extension → MIME lookup (`metadata`)
//! - The binary envelope format (`envelope`)
//! - Single-file encrypt / decrypt / inspect (`file_cipher`)
//! - Whole-folder encrypt / decrypt (`folder`)

pub mod envelope;
pub mod file_cipher;
pub mod folder;
pub mod metadata;

// Re-export the most commonly used items.
pub use envelope::Envelope;
pub use file_cipher::{decrypt, encrypt, inspect, DecryptedFile, EnvelopeInfo};
pub use folder::{decrypt_folder, encrypt_folder};
pub use metadata::{derive_metadata, mime_for_extension, FileMetadata};
