// Rust guideline compliant 2026-10-18

//! Commit Guard Git Hooks
//!
//! This crate connects the Commit Guard rules to a real repository:
//! - Staged content read from the git index
//! - Large-file pointer decoding through the smudge filter
//! - Logging setup
//! - The pre-commit hook entry point

pub mod index;
pub mod lfs;
pub mod logging;
pub mod pre_commit;

pub use index::GitIndexSource;
pub use logging::init_logging;
pub use pre_commit::{evaluate_staged, exit_code, pre_commit_hook, report, write_report};
