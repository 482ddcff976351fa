// Rust guideline compliant 2026-10-18

//! Implementation of the `commitguard check` command.

use crate::commands::load_config;
use crate::git;
use anyhow::Result;
use commitguard_core::Decision;
use commitguard_hooks::{evaluate_staged, init_logging};
use std::path::Path;

/// Checks the staged content of the repository containing `repo_path`.
///
/// # Arguments
///
/// * `repo_path` - Any path inside the Git repository
/// * `log_level` - Log level overriding the configuration
///
/// # Returns
///
/// The commit decision; the caller reports it.
///
/// # Errors
///
/// Returns an error if the repository, configuration, or staged content cannot
/// be read.
pub fn execute(repo_path: &Path, log_level: Option<&str>) -> Result<Decision> {
    let root = git::repo_root(repo_path)?;
    let config = load_config(&root, log_level)?;
    let _log_guard = init_logging(&config)?;

    tracing::debug!(root = %root.display(), "checking staged content");
    evaluate_staged(&root, &config)
}
