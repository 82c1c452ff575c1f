//! `FileMetadata`: the original name and content type of an encrypted file.
//!
//! Metadata travels unencrypted inside the envelope so a decrypted file
//! can be restored under its original name.  Anyone holding the
//! envelope can read the name and type without the key.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Content type used for any extension we do not recognise.
pub const DEFAULT_MIME: &str = "application/octet-stream";

/// Name and content type of the file an envelope was made from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    /// Base name of the input file (e.g. "holiday.jpg").
    pub original_name: String,

    /// Content type inferred from the extension.
    pub mime: String,
}

/// Build metadata for the file at `path`.
pub fn derive_metadata(path: &Path) -> FileMetadata {
    let original_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mime = path
        .extension()
        .map(|ext| mime_for_extension(&ext.to_string_lossy()))
        .unwrap_or(DEFAULT_MIME);

    FileMetadata {
        original_name,
        mime: mime.to_string(),
    }
}

/// Map a file extension (with or without the leading dot) to a content
/// type.  Matching is case-insensitive.
pub fn mime_for_extension(ext: &str) -> &'static str {
    let ext = ext.trim_start_matches('.');
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => DEFAULT_MIME,
    }
}
