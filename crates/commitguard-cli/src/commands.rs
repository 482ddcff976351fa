// Rust guideline compliant 2026-10-18

//! Command implementations for the Commit Guard CLI.

pub mod check;
pub mod config;
pub mod init;

use anyhow::Result;
use commitguard_core::Config;
use std::path::Path;

/// Loads configuration for the repository rooted at `root`, applying a log
/// level given on the command line.
///
/// # Errors
///
/// Returns an error if the configuration file or overrides are invalid.
pub(crate) fn load_config(root: &Path, log_level: Option<&str>) -> Result<Config> {
    let mut config = Config::load(root)?;
    if let Some(level) = log_level {
        config.log_level = level.to_lowercase();
        config.validate()?;
    }
    Ok(config)
}
