//! Whole-file encryption and decryption.
//!
//! `encrypt` turns a plaintext file into an envelope file; `decrypt`
//! turns an envelope back into the original file inside a target
//! directory.  Both read the whole input into memory and write their
//! output atomically, so a failed call never leaves a partial file.

use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use zeroize::Zeroizing;

use crate::crypto::encryption;
use crate::crypto::keys::check_key;
use crate::crypto::IV_LEN;
use crate::errors::{SecretSlideError, Result};

use super::envelope::Envelope;
use super::metadata::{derive_metadata, FileMetadata};

/// Result of a successful `decrypt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptedFile {
    /// Metadata recovered from the envelope.
    pub metadata: FileMetadata,
    /// Path the plaintext was written to.
    pub output_path: PathBuf,
}

/// What `inspect` can tell about an envelope without a key.
#[derive(Debug, Clone)]
pub struct EnvelopeInfo {
    pub metadata: FileMetadata,
    pub iv: [u8; IV_LEN],
    pub ciphertext_len: usize,
    pub total_len: usize,
}

/// Encrypt the file at `input` and write the envelope to `output`.
pub fn encrypt(input: &Path, output: &Path, key: &[u8]) -> Result<()> {
    check_key(key)?;

    let plaintext = Zeroizing::new(fs::read(input)?);
    let sealed = encryption::encrypt(key, &plaintext)?;

    let envelope = Envelope {
        iv: sealed.iv,
        tag: sealed.tag,
        metadata: derive_metadata(input),
        ciphertext: sealed.ciphertext,
    };

    write_atomic(output, &envelope.to_bytes()?)?;

    tracing::debug!(
        input = %input.display(),
        output = %output.display(),
        bytes = plaintext.len(),
        "encrypted file"
    );
    Ok(())
}

/// Decrypt the envelope at `input` into `output_dir`.
///
/// The file is written under the name stored in the envelope.  The tag
/// is verified before anything touches the disk.
pub fn decrypt(input: &Path, output_dir: &Path, key: &[u8]) -> Result<DecryptedFile> {
    check_key(key)?;

    let data = fs::read(input)?;
    let envelope = Envelope::from_bytes(&data)?;
    let file_name = safe_file_name(&envelope.metadata.original_name)?;

    let plaintext = encryption::decrypt(key, &envelope.iv, &envelope.tag, &envelope.ciphertext)?;

    let output_path = output_dir.join(file_name);
    write_atomic(&output_path, &plaintext)?;

    tracing::debug!(
        input = %input.display(),
        output = %output_path.display(),
        mime = %envelope.metadata.mime,
        "decrypted file"
    );

    Ok(DecryptedFile {
        metadata: envelope.metadata,
        output_path,
    })
}

/// Read the unencrypted parts of an envelope.
pub fn inspect(input: &Path) -> Result<EnvelopeInfo> {
    let data = fs::read(input)?;
    let envelope = Envelope::from_bytes(&data)?;

    Ok(EnvelopeInfo {
        ciphertext_len: envelope.ciphertext.len(),
        total_len: data.len(),
        iv: envelope.iv,
        metadata: envelope.metadata,
    })
}

/// Reduce a stored name to a single path component.
///
/// Envelopes are untrusted input: a name like `../../.bashrc` must not
/// escape the output directory.
fn safe_file_name(name: &str) -> Result<&OsStr> {
    Path::new(name)
        .file_name()
        .filter(|n| !n.is_empty())
        .ok_or_else(|| {
            SecretSlideError::InvalidEnvelope(format!("unusable original name {name:?}"))
        })
}

/// Write `bytes` to `path` **atomically**.
///
/// Writes to a uniquely named temp file in the same directory, then
/// renames it over the target.  The temp file is removed if either
/// step fails.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
