//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::EnvelopeInfo;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print the readable fields of an envelope as a two-column table.
pub fn print_envelope_table(info: &EnvelopeInfo) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Value"]);

    table.add_row(vec!["Original name".to_string(), info.metadata.original_name.clone()]);
    table.add_row(vec!["Type".to_string(), info.metadata.mime.clone()]);
    table.add_row(vec!["IV".to_string(), hex::encode(info.iv)]);
    table.add_row(vec![
        "Ciphertext".to_string(),
        format!("{} bytes", info.ciphertext_len),
    ]);
    table.add_row(vec!["File size".to_string(), format!("{} bytes", info.total_len)]);

    println!("{table}");
}
