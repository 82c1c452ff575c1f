//! `secretslide encrypt` — seal one file into an envelope.

use std::path::{Path, PathBuf};

use crate::cli::output;
use crate::cli::{load_settings, resolve_key, Cli};
use crate::errors::Result;
use crate::vault;

/// Execute the `encrypt` command.
pub fn execute(cli: &Cli, input: &str, output_path: Option<&str>) -> Result<()> {
    let settings = load_settings()?;
    let input = Path::new(input);
    let target = match output_path {
        Some(p) => PathBuf::from(p),
        None => settings.envelope_path(input),
    };

    let key = resolve_key(cli, &settings)?;
    if target.exists() {
        output::warning(&format!("Overwriting existing {}", target.display()));
    }
    vault::encrypt(input, &target, key.as_bytes())?;

    output::success(&format!(
        "Encrypted {} → {}",
        input.display(),
        target.display()
    ));
    output::tip("The original file is untouched — delete it yourself once you have checked the envelope.");

    Ok(())
}
