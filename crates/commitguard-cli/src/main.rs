// Rust guideline compliant 2026-10-18

//! Commit Guard CLI Application
//!
//! Command-line interface for checking staged content and installing the hook.

use clap::Parser;
use commitguard_cli::commands;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "commitguard",
    version,
    about = "Commit Guard: block commits that stage forbidden packages or leaked settings",
    after_help = "Examples:\n  commitguard init\n  commitguard check\n  commitguard config --repo ../game\n"
)]
struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Check staged content (the pre-commit hook runs this)
    Check {
        /// Path inside the repository
        #[arg(long)]
        repo: Option<PathBuf>,
    },

    /// Write a default config and install the pre-commit hook
    Init {
        /// Path inside the repository
        #[arg(long)]
        repo: Option<PathBuf>,

        /// Replace an existing pre-commit hook
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Config {
        /// Path inside the repository
        #[arg(long)]
        repo: Option<PathBuf>,
    },
}

fn resolve(repo: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match repo {
        Some(path) => Ok(path),
        None => Ok(std::env::current_dir()?),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let log_level = cli.log_level.as_deref();

    match cli.command.unwrap_or(Commands::Check { repo: None }) {
        Commands::Check { repo } => {
            let decision = commands::check::execute(&resolve(repo)?, log_level)?;
            return Ok(commitguard_hooks::report(&decision));
        }
        Commands::Init { repo, force } => {
            commands::init::execute(&resolve(repo)?, force)?;
        }
        Commands::Config { repo } => {
            commands::config::execute(&resolve(repo)?, log_level)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
