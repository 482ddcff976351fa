// Rust guideline compliant 2026-10-18

//! Shared Git helpers for CLI commands.

use anyhow::Result;
use git2::Repository;
use std::path::{Path, PathBuf};

/// Opens the repository containing `path`.
///
/// # Errors
///
/// Returns an error if `path` is not inside a Git repository.
pub fn open(path: &Path) -> Result<Repository> {
    Repository::discover(path).map_err(|_| {
        anyhow::anyhow!(
            "Not a git repository: {}. Run 'git init' first.",
            path.display()
        )
    })
}

/// Returns the working directory root of the repository containing `path`.
///
/// # Errors
///
/// Returns an error if no repository is found or it is bare.
pub fn repo_root(path: &Path) -> Result<PathBuf> {
    let repo = open(path)?;
    let root = repo
        .workdir()
        .ok_or_else(|| anyhow::anyhow!("Bare repositories have no working directory"))?;
    Ok(root.to_path_buf())
}

/// Returns the hooks directory git runs for the repository containing `path`.
///
/// Honors `core.hooksPath`, resolved against the working directory root when
/// relative. Otherwise the common directory's `hooks`, which linked worktrees
/// share with the main checkout.
///
/// # Errors
///
/// Returns an error if no repository is found or its config cannot be read.
pub fn hooks_dir(path: &Path) -> Result<PathBuf> {
    let repo = open(path)?;
    let configured = repo.config()?.get_path("core.hooksPath").ok();
    match configured {
        Some(dir) if dir.is_relative() => {
            let base = repo.workdir().unwrap_or_else(|| repo.path());
            Ok(base.join(dir))
        }
        Some(dir) => Ok(dir),
        None => Ok(repo.commondir().join("hooks")),
    }
}
