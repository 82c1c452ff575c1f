//! `secretslide key` — manage the key saved in the OS keyring.
//!
//! Subcommands:
//! - `secretslide key save`   — derive a key from a password and save it
//! - `secretslide key clear`  — remove the saved key
//! - `secretslide key status` — report whether a key is saved
//! - `secretslide key check`  — check a password against the saved key

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{block_on, key_store, keyring_enabled, load_settings, Cli, KeyAction};
use crate::cli::{prompt_new_password, prompt_password};
use crate::config::Settings;
use crate::crypto::derive_key;
use crate::errors::{SecretSlideError, Result};
use crate::keystore::KeyStoreHandle;

/// Execute a `key` subcommand.
pub fn execute(cli: &Cli, action: &KeyAction) -> Result<()> {
    let settings = load_settings()?;
    let store = require_keyring(cli, &settings)?;

    match action {
        KeyAction::Save => {
            let password = prompt_new_password()?;
            let key = derive_key(password.as_bytes());
            block_on(store.save(key))??;
            output::success("Key saved to OS keyring. Future runs will not ask for a password.");
        }
        KeyAction::Clear { force } => {
            if !force {
                let confirmed = Confirm::new()
                    .with_prompt("Remove the saved key?")
                    .default(false)
                    .interact()
                    .map_err(|e| SecretSlideError::CommandFailed(format!("confirm prompt: {e}")))?;

                if !confirmed {
                    output::info("Cancelled.");
                    return Ok(());
                }
            }
            block_on(store.clear())??;
            output::success("Saved key removed from OS keyring.");
        }
        KeyAction::Status => {
            if block_on(store.load())??.is_some() {
                output::success("A key is saved in the OS keyring.");
            } else {
                output::info("No key saved.");
                output::tip("Run `secretslide key save` to store one.");
            }
        }
        KeyAction::Check => {
            let password = prompt_password()?;
            let candidate = derive_key(password.as_bytes());
            if block_on(store.matches(&candidate))?? {
                output::success("Password matches the saved key.");
            } else {
                return Err(SecretSlideError::CommandFailed(
                    "password does not match the saved key (or no key is saved)".into(),
                ));
            }
        }
    }

    Ok(())
}

/// Key management only makes sense against the real OS store.
fn require_keyring(cli: &Cli, settings: &Settings) -> Result<KeyStoreHandle> {
    if !keyring_enabled(cli, settings) {
        return Err(SecretSlideError::KeyStore(
            "OS keyring is disabled (--no-keyring, `use_keyring = false`, or built without `keyring-store`)"
                .into(),
        ));
    }
    Ok(key_store(cli, settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn key_commands_refuse_without_keyring() {
        let cli = Cli::parse_from(["secretslide", "--no-keyring", "key", "status"]);
        let result = execute(&cli, &KeyAction::Status);
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("OS keyring is disabled"), "unexpected error: {msg}");
    }
}
