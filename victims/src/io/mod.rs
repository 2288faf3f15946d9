//! I/O helpers: the backing JSON file and the TOML configuration.

pub mod config;
pub mod record_file;
