// Rust guideline compliant 2026-10-18

//! Implementation of the `commitguard config` command.

use crate::commands::load_config;
use crate::git;
use anyhow::Result;
use std::path::Path;

/// Renders the effective configuration for the repository as TOML.
///
/// # Errors
///
/// Returns an error if the repository or configuration cannot be read.
pub fn render(repo_path: &Path, log_level: Option<&str>) -> Result<String> {
    let root = git::repo_root(repo_path)?;
    let config = load_config(&root, log_level)?;
    Ok(config.to_toml()?)
}

/// Prints the effective configuration.
///
/// # Errors
///
/// Returns an error if the repository or configuration cannot be read.
pub fn execute(repo_path: &Path, log_level: Option<&str>) -> Result<()> {
    print!("{}", render(repo_path, log_level)?);
    Ok(())
}
