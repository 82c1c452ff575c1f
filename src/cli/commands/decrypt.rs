//! `secretslide decrypt` — restore one envelope to its original file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::output;
use crate::cli::{load_settings, resolve_key, Cli};
use crate::errors::Result;
use crate::vault;

/// Execute the `decrypt` command.
pub fn execute(cli: &Cli, input: &str, output_dir: Option<&str>) -> Result<()> {
    let settings = load_settings()?;
    let dir = match output_dir {
        Some(d) => PathBuf::from(d),
        None => settings.output_dir(&std::env::current_dir()?),
    };

    fs::create_dir_all(&dir)?;

    let key = resolve_key(cli, &settings)?;
    let restored = vault::decrypt(Path::new(input), &dir, key.as_bytes())?;

    output::success(&format!(
        "Decrypted {} ({}) → {}",
        restored.metadata.original_name,
        restored.metadata.mime,
        restored.output_path.display()
    ));

    Ok(())
}
