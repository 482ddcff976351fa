// Rust guideline compliant 2026-10-18

//! Implementation of the `commitguard init` command.
//!
//! Writes a default `.commitguard.toml` and installs the pre-commit hook.

use crate::git;
use anyhow::Result;
use commitguard_core::{Config, CONFIG_FILE_NAME};
use std::fs;
use std::path::Path;

/// Command the installed hook runs.
pub const HOOK_COMMAND: &str = "commitguard check";

/// Initializes Commit Guard in the repository containing `repo_path`.
///
/// An existing config file is kept. An existing pre-commit hook that does not
/// already run the guard is only replaced when `force` is set.
///
/// # Errors
///
/// Returns an error if:
/// - `repo_path` is not inside a non-bare Git repository
/// - A foreign pre-commit hook exists and `force` is not set
/// - The config file or hook cannot be written
pub fn execute(repo_path: &Path, force: bool) -> Result<()> {
    let root = git::repo_root(repo_path)?;

    let config_path = root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        println!("  - Kept existing {}", CONFIG_FILE_NAME);
    } else {
        Config::default().save(&root)?;
        println!("  - Created {}", CONFIG_FILE_NAME);
    }

    let hooks_dir = git::hooks_dir(repo_path)?;
    fs::create_dir_all(&hooks_dir)?;
    let hook_path = hooks_dir.join("pre-commit");
    if hook_path.exists() && !force {
        let existing = fs::read_to_string(&hook_path).unwrap_or_default();
        if !existing.contains(HOOK_COMMAND) {
            anyhow::bail!(
                "A pre-commit hook already exists at {}. Use --force to replace it.",
                hook_path.display()
            );
        }
    }
    install_hook(&hook_path)?;
    println!("  - Installed pre-commit hook");

    println!("✓ Commit Guard initialized at {}", root.display());
    Ok(())
}

fn install_hook(path: &Path) -> Result<()> {
    let hook_content = format!("#!/bin/sh\nexec {}\n", HOOK_COMMAND);
    fs::write(path, hook_content)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms)?;
    }

    Ok(())
}
