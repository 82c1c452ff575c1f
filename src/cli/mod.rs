//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::future::Future;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::crypto::{derive_key, SecretKey};
use crate::errors::{SecretSlideError, Result};
use crate::keystore::{KeyStoreHandle, MemoryKeyStore};

/// Environment variable consulted before any prompt.
pub const PASSWORD_ENV: &str = "SECRETSLIDE_PASSWORD";

/// SecretSlide CLI: password-protected file encryption.
#[derive(Parser)]
#[command(
    name = "secretslide",
    about = "Encrypt and decrypt files with a password-derived key",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Do not read or write the OS keyring
    #[arg(long, global = true)]
    pub no_keyring: bool,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Encrypt a file into a secret envelope
    Encrypt {
        /// File to encrypt
        input: String,
        /// Envelope path (default: <INPUT>.<extension>)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Decrypt an envelope back to its original file
    Decrypt {
        /// Envelope to decrypt
        input: String,
        /// Directory to restore into (default: from .secretslide.toml)
        #[arg(short = 'd', long)]
        output_dir: Option<String>,
    },

    /// Encrypt every file in a folder
    EncryptFolder {
        /// Folder holding the plaintext files
        dir: String,
        /// Folder for the envelopes (default: same folder)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Decrypt every envelope in a folder
    DecryptFolder {
        /// Folder holding the envelopes
        dir: String,
        /// Folder to restore into (default: from .secretslide.toml)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show the unencrypted metadata of an envelope
    Inspect {
        /// Envelope to inspect
        input: String,
    },

    /// Manage the key stored in the OS keyring
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Key subcommands for the OS keyring entry.
#[derive(clap::Subcommand)]
pub enum KeyAction {
    /// Derive a key from a password and save it (auto-unlock)
    Save,

    /// Remove the saved key
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Report whether a key is saved
    Status,

    /// Check a password against the saved key
    Check,
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects DEBUG and
/// the default is WARN.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    // A second init (e.g. in tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

/// Load `.secretslide.toml` from the working directory.
pub fn load_settings() -> Result<Settings> {
    let cwd = std::env::current_dir()?;
    Settings::load(&cwd)
}

/// Whether this run may touch the OS keyring.
pub fn keyring_enabled(cli: &Cli, settings: &Settings) -> bool {
    cfg!(feature = "keyring-store") && settings.use_keyring && !cli.no_keyring
}

/// The key store for this run.
///
/// With the keyring disabled this is an empty in-memory store, so
/// loads find nothing and the caller falls through to a prompt.
pub fn key_store(cli: &Cli, settings: &Settings) -> KeyStoreHandle {
    #[cfg(feature = "keyring-store")]
    if keyring_enabled(cli, settings) {
        return KeyStoreHandle::new(crate::keystore::OsKeyStore::new());
    }

    #[cfg(not(feature = "keyring-store"))]
    let _ = (cli, settings);

    KeyStoreHandle::new(MemoryKeyStore::new())
}

/// Drive a key store future to completion on a private runtime.
pub fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .map_err(|e| SecretSlideError::CommandFailed(format!("tokio runtime: {e}")))?;
    Ok(runtime.block_on(future))
}

/// Get the file key, trying in order:
/// 1. `SECRETSLIDE_PASSWORD` env var (scripts/CI)
/// 2. The saved key in the OS keyring
/// 3. Interactive password prompt
pub fn resolve_key(cli: &Cli, settings: &Settings) -> Result<SecretKey> {
    if let Some(pw) = password_from_env() {
        return Ok(derive_key(pw.as_bytes()));
    }

    if keyring_enabled(cli, settings) {
        match block_on(key_store(cli, settings).load())? {
            Ok(Some(key)) => return Ok(key),
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "keyring unavailable, falling back to prompt"),
        }
    }

    let pw = prompt_password()?;
    Ok(derive_key(pw.as_bytes()))
}

/// Read the password from the environment, ignoring an empty value.
fn password_from_env() -> Option<Zeroizing<String>> {
    match std::env::var(PASSWORD_ENV) {
        Ok(pw) if !pw.is_empty() => Some(Zeroizing::new(pw)),
        _ => None,
    }
}

/// Get the password from `SECRETSLIDE_PASSWORD` or an interactive prompt.
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env() {
        return Ok(pw);
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter password")
        .interact()
        .map_err(|e| SecretSlideError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a password with confirmation (used by `key save`).
///
/// Also respects `SECRETSLIDE_PASSWORD` for scripted usage.
pub fn prompt_new_password() -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env() {
        return Ok(pw);
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Choose password")
        .with_confirmation("Confirm password", "Passwords do not match, try again")
        .interact()
        .map_err(|e| SecretSlideError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}
