//! Folder-level "secret mode": encrypt or decrypt every file in a directory.
//!
//! Only the top level of the input directory is visited.  Hidden files
//! (leading `.`) and subdirectories are skipped.  Files are processed in
//! name order and the first failure stops the run; anything written
//! before it is a complete file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::Result;

use super::file_cipher::{self, DecryptedFile};

/// Encrypt every regular file in `input_dir` into `output_dir`.
///
/// Each output is named `<original name>.<extension>`.  Files that
/// already carry `extension` are skipped so re-running over a mixed
/// folder does not double-encrypt.  Returns the envelope paths written.
pub fn encrypt_folder(
    input_dir: &Path,
    output_dir: &Path,
    key: &[u8],
    extension: &str,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;

    let mut written = Vec::new();
    for path in visible_files(input_dir)? {
        if has_extension(&path, extension) {
            continue;
        }
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        let target = output_dir.join(format!("{name}.{extension}"));
        file_cipher::encrypt(&path, &target, key)?;
        written.push(target);
    }

    tracing::debug!(dir = %input_dir.display(), count = written.len(), "encrypted folder");
    Ok(written)
}

/// Decrypt every `*.<extension>` file in `input_dir` into `output_dir`.
pub fn decrypt_folder(
    input_dir: &Path,
    output_dir: &Path,
    key: &[u8],
    extension: &str,
) -> Result<Vec<DecryptedFile>> {
    fs::create_dir_all(output_dir)?;

    let mut restored = Vec::new();
    for path in visible_files(input_dir)? {
        if !has_extension(&path, extension) {
            continue;
        }
        restored.push(file_cipher::decrypt(&path, output_dir, key)?);
    }

    tracing::debug!(dir = %input_dir.display(), count = restored.len(), "decrypted folder");
    Ok(restored)
}

/// Regular, non-hidden files directly inside `dir`, sorted by name.
fn visible_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        files.push(entry.path());
    }
    files.sort();
    Ok(files)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const KEY: [u8; 32] = [0x42u8; 32];

    #[test]
    fn folder_roundtrip_skips_hidden_and_subdirs() {
        let src = TempDir::new().unwrap();
        fs::write(src.path().join("a.png"), b"aaa").unwrap();
        fs::write(src.path().join("b.jpg"), b"bbbb").unwrap();
        fs::write(src.path().join(".hidden"), b"skip").unwrap();
        fs::create_dir(src.path().join("nested")).unwrap();

        let sealed = TempDir::new().unwrap();
        let written = encrypt_folder(src.path(), sealed.path(), &KEY, "secret").unwrap();
        assert_eq!(
            written,
            vec![
                sealed.path().join("a.png.secret"),
                sealed.path().join("b.jpg.secret"),
            ]
        );

        let restored_dir = TempDir::new().unwrap();
        let restored = decrypt_folder(sealed.path(), restored_dir.path(), &KEY, "secret").unwrap();
        assert_eq!(restored.len(), 2);
        assert_eq!(fs::read(restored_dir.path().join("a.png")).unwrap(), b"aaa");
        assert_eq!(fs::read(restored_dir.path().join("b.jpg")).unwrap(), b"bbbb");
    }

    #[test]
    fn encrypt_folder_skips_existing_envelopes() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("photo.gif"), b"gif").unwrap();

        let first = encrypt_folder(dir.path(), dir.path(), &KEY, "secret").unwrap();
        assert_eq!(first.len(), 1);

        let second = encrypt_folder(dir.path(), dir.path(), &KEY, "secret").unwrap();
        assert_eq!(second, vec![dir.path().join("photo.gif.secret")]);
    }

    #[test]
    fn decrypt_folder_stops_on_wrong_key() {
        let src = TempDir::new().unwrap();
        fs::write(src.path().join("x.png"), b"x").unwrap();
        encrypt_folder(src.path(), src.path(), &KEY, "secret").unwrap();

        let out = TempDir::new().unwrap();
        let result = decrypt_folder(src.path(), out.path(), &[0x43u8; 32], "secret");
        assert!(result.is_err());
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
    }
}
