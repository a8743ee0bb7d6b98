//! Configuration for the résumé terminal.
//!
//! Values are resolved from built-in defaults, then the TOML config file, then
//! environment variables and command line flags.

mod config;

pub use config::*;
