// Rust guideline compliant 2026-10-18

//! Commit Guard Core Library
//!
//! This crate provides the rule engine behind the Commit Guard pre-commit hook:
//! - Staged content retrieval seam (`StagedContentSource`) and an in-memory source
//! - Package manifest checks (forbidden packages, forbidden dependency sources)
//! - Project settings checks (leaked identifiers)
//! - The guard that sequences the checks into a single commit decision
//! - Configuration and error types

pub mod config;
pub mod error;
pub mod guard;
pub mod manifest;
pub mod settings;
pub mod source;

pub use config::{Config, ForbiddenPackage, SettingsRule, SourceRule, CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use guard::{CommitGuard, Decision, RuleKind, Violation, REJECTION_PREFIX};
pub use manifest::PackageManifest;
pub use source::{MemorySource, StagedContentSource};
