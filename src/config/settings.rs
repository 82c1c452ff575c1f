use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{SecretSlideError, Result};

/// Project-level configuration, loaded from `.secretslide.toml`.
///
/// Every field has a sensible default so SecretSlide works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory where decrypted files are restored (default: ".").
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Extension given to encrypted files, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Whether the CLI reads and writes the OS keyring.
    #[serde(default = "default_use_keyring")]
    pub use_keyring: bool,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_extension() -> String {
    "secret".to_string()
}

fn default_use_keyring() -> bool {
    true
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            extension: default_extension(),
            use_keyring: default_use_keyring(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    const FILE_NAME: &'static str = ".secretslide.toml";

    /// Load settings from `<dir>/.secretslide.toml`.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed or holds an unusable
    /// value, an error is returned.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            SecretSlideError::Config(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        settings.validate()?;
        tracing::debug!(path = %config_path.display(), "loaded settings");
        Ok(settings)
    }

    /// Reject extensions that would change where files land.
    fn validate(&self) -> Result<()> {
        let ext = &self.extension;
        if ext.is_empty() {
            return Err(SecretSlideError::Config("extension cannot be empty".into()));
        }
        if ext.starts_with('.') || ext.contains('/') || ext.contains('\\') {
            return Err(SecretSlideError::Config(format!(
                "extension '{ext}' must be a bare suffix like \"secret\""
            )));
        }
        Ok(())
    }

    /// Resolve the decrypt output directory against `base`.
    pub fn output_dir(&self, base: &Path) -> PathBuf {
        base.join(&self.output_dir)
    }

    /// Default envelope path for `input`: `<input>.<extension>`.
    ///
    /// Example: `photos/cat.png` → `photos/cat.png.secret`
    pub fn envelope_path(&self, input: &Path) -> PathBuf {
        let mut name = input.as_os_str().to_os_string();
        name.push(".");
        name.push(&self.extension);
        PathBuf::from(name)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
