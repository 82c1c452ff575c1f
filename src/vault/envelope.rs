//! Binary envelope format for encrypted files.
//!
//! An envelope has this layout:
//!
//! ```text
//! [IV: 12 bytes][GCM tag: 16 bytes][metadata JSON]["\n"][ciphertext]
//! ```
//!
//! - **IV**: random per encryption, never reused with the same key.
//! - **Tag**: the AES-256-GCM authentication tag over the ciphertext.
//! - **Metadata JSON**: compact `{"originalName":"...","mime":"..."}`.
//!   It is stored in the clear; only the file contents are encrypted.
//! - **Ciphertext**: everything after the first newline that follows
//!   the fixed-size header.
//!
//! Compact JSON never contains a raw newline (string escapes cover
//! it), so the first `\n` after offset 28 always ends the metadata.

use crate::crypto::{IV_LEN, TAG_LEN};
use crate::errors::{SecretSlideError, Result};

use super::metadata::FileMetadata;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Fixed-size prefix: 12 (IV) + 16 (tag).
pub const HEADER_LEN: usize = IV_LEN + TAG_LEN;

/// Byte that terminates the metadata block.
const DELIMITER: u8 = b'\n';

/// Smallest buffer that can hold a header and a delimiter.
pub const MIN_LEN: usize = HEADER_LEN + 1;

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// A parsed envelope: the four parts of an encrypted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub iv: [u8; IV_LEN],
    pub tag: [u8; TAG_LEN],
    pub metadata: FileMetadata,
    pub ciphertext: Vec<u8>,
}

impl Envelope {
    /// Serialize into a single contiguous buffer.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let meta = serde_json::to_vec(&self.metadata)
            .map_err(|e| SecretSlideError::Serialization(format!("metadata: {e}")))?;

        let mut buf = Vec::with_capacity(HEADER_LEN + meta.len() + 1 + self.ciphertext.len());
        buf.extend_from_slice(&self.iv); // 12 bytes
        buf.extend_from_slice(&self.tag); // 16 bytes
        buf.extend_from_slice(&meta); // metadata JSON
        buf.push(DELIMITER); // 1 byte
        buf.extend_from_slice(&self.ciphertext);
        Ok(buf)
    }

    /// Parse a buffer produced by `to_bytes`.
    ///
    /// Fails with `InvalidEnvelope` if the buffer is shorter than the
    /// header, has no delimiter after the header, or the metadata is
    /// not the expected JSON object.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_LEN {
            return Err(SecretSlideError::InvalidEnvelope(format!(
                "file too small ({} bytes, need at least {MIN_LEN})",
                data.len()
            )));
        }

        let (header, rest) = data.split_at(HEADER_LEN);

        let meta_end = rest
            .iter()
            .position(|&b| b == DELIMITER)
            .ok_or_else(|| {
                SecretSlideError::InvalidEnvelope("missing metadata delimiter".into())
            })?;

        let metadata: FileMetadata = serde_json::from_slice(&rest[..meta_end])
            .map_err(|e| SecretSlideError::InvalidEnvelope(format!("metadata JSON: {e}")))?;

        let mut iv = [0u8; IV_LEN];
        iv.copy_from_slice(&header[..IV_LEN]);
        let mut tag = [0u8; TAG_LEN];
        tag.copy_from_slice(&header[IV_LEN..]);

        Ok(Self {
            iv,
            tag,
            metadata,
            ciphertext: rest[meta_end + 1..].to_vec(),
        })
    }
}
