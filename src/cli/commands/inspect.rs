//! `secretslide inspect` — show what an envelope reveals without a key.

use std::path::Path;

use crate::cli::output;
use crate::errors::Result;
use crate::vault;

/// Execute the `inspect` command.
pub fn execute(input: &str) -> Result<()> {
    let info = vault::inspect(Path::new(input))?;
    output::print_envelope_table(&info);
    Ok(())
}
