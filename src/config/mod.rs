//! Configuration loaded from `.secretslide.toml`.

pub mod settings;

pub use settings::Settings;
