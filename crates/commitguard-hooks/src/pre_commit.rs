// Rust guideline compliant 2026-10-18

//! Pre-commit hook implementation.
//!
//! Checks the staged package manifest and project settings and reports at most
//! one violation.

use crate::{init_logging, GitIndexSource};
use anyhow::Result;
use commitguard_core::{CommitGuard, Config, Decision};
use git2::Repository;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

/// Runs the pre-commit hook.
///
/// Loads configuration from the repository root, installs logging, then
/// evaluates the staged content.
///
/// # Arguments
///
/// * `repo_path` - Any path inside the Git repository
///
/// # Returns
///
/// The commit decision.
///
/// # Errors
///
/// Returns an error if:
/// - No repository is found or it is bare
/// - Configuration is invalid
/// - Staged content cannot be read, decoded, or parsed
pub fn pre_commit_hook(repo_path: &Path) -> Result<Decision> {
    let repo = Repository::discover(repo_path)
        .map_err(|_| anyhow::anyhow!("Not a git repository: {}", repo_path.display()))?;
    let workdir = repo
        .workdir()
        .ok_or_else(|| anyhow::anyhow!("Bare repositories have nothing staged to check"))?
        .to_path_buf();

    let config = Config::load(&workdir)?;
    let _log_guard = init_logging(&config)?;

    let source = GitIndexSource::new(repo, config.smudge_command.clone())?;
    tracing::debug!(workdir = %workdir.display(), "running pre-commit checks");
    Ok(CommitGuard::new(&source, &config).evaluate()?)
}

/// Evaluates staged content with an already loaded configuration.
///
/// # Errors
///
/// Returns an error if the repository cannot be opened or staged content
/// cannot be read, decoded, or parsed.
pub fn evaluate_staged(repo_path: &Path, config: &Config) -> Result<Decision> {
    let source = GitIndexSource::discover(repo_path, config.smudge_command.clone())?;
    Ok(CommitGuard::new(&source, config).evaluate()?)
}

/// Process exit code for a decision: 0 allows the commit, 1 rejects it.
pub fn exit_code(decision: &Decision) -> u8 {
    match decision {
        Decision::Allow => 0,
        Decision::Reject(_) => 1,
    }
}

/// Writes the rejection line for `decision`, if any, to `out`.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_report<W: Write>(decision: &Decision, out: &mut W) -> std::io::Result<()> {
    if let Some(violation) = decision.violation() {
        writeln!(out, "{}", violation.message())?;
    }
    Ok(())
}

/// Prints the rejection line to stdout and returns the exit code.
pub fn report(decision: &Decision) -> ExitCode {
    // A closed stdout must not turn a rejection into an allow.
    let _ = write_report(decision, &mut std::io::stdout().lock());
    ExitCode::from(exit_code(decision))
}
