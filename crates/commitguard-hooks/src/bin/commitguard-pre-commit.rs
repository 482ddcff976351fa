// Rust guideline compliant 2026-10-18

//! CLI entry point for the Commit Guard pre-commit hook.

use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let repo_path = std::env::current_dir()?;
    let decision = commitguard_hooks::pre_commit_hook(&repo_path)?;
    Ok(commitguard_hooks::report(&decision))
}
