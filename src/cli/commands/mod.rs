//! One module per subcommand; each exposes an `execute` entry point.

pub mod completions;
pub mod decrypt;
pub mod encrypt;
pub mod folder;
pub mod inspect;
pub mod key;
