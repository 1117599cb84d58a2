//! Configuration loading
//!
//! Handles loading from config files, environment variables, and CLI
//! arguments with proper precedence (CLI > Env > File > Defaults). The
//! environment step is handled by clap's `env` support on the arguments
//! themselves; this module owns the file step.

pub mod loader;

pub use loader::load_config;

use serde::Deserialize;
use std::path::PathBuf;

/// File-level settings. Every field is optional; CLI arguments win.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to the SQLite database file to export from.
    pub database: Option<PathBuf>,

    /// Directory receiving the rendered documents.
    pub output: Option<PathBuf>,
}
