//! `secretslide encrypt-folder` / `decrypt-folder` — whole-folder secret mode.

use std::path::{Path, PathBuf};

use crate::cli::output;
use crate::cli::{load_settings, resolve_key, Cli};
use crate::errors::Result;
use crate::vault;

/// Execute the `encrypt-folder` command.
pub fn execute_encrypt(cli: &Cli, dir: &str, output_dir: Option<&str>) -> Result<()> {
    let settings = load_settings()?;
    let input = Path::new(dir);
    let target = output_dir.map_or_else(|| input.to_path_buf(), PathBuf::from);

    let key = resolve_key(cli, &settings)?;
    let written = vault::encrypt_folder(input, &target, key.as_bytes(), &settings.extension)?;

    if written.is_empty() {
        output::info("No files to encrypt.");
    } else {
        output::success(&format!(
            "Encrypted {} file(s) into {}",
            written.len(),
            target.display()
        ));
    }

    Ok(())
}

/// Execute the `decrypt-folder` command.
pub fn execute_decrypt(cli: &Cli, dir: &str, output_dir: Option<&str>) -> Result<()> {
    let settings = load_settings()?;
    let target = match output_dir {
        Some(d) => PathBuf::from(d),
        None => settings.output_dir(&std::env::current_dir()?),
    };

    let key = resolve_key(cli, &settings)?;
    let restored =
        vault::decrypt_folder(Path::new(dir), &target, key.as_bytes(), &settings.extension)?;

    if restored.is_empty() {
        output::info(&format!("No .{} files found.", settings.extension));
    } else {
        for file in &restored {
            output::info(&file.output_path.display().to_string());
        }
        output::success(&format!("Decrypted {} file(s)", restored.len()));
    }

    Ok(())
}
