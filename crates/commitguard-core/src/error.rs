// Rust guideline compliant 2026-10-18

//! Error types for the Commit Guard core library.
//!
//! Everything here is an environment fault. Policy violations are reported as
//! [`crate::Decision::Reject`] values and never travel through this type.

use thiserror::Error;

/// Result type alias for Commit Guard operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Commit Guard operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Git operation error.
    #[error("Git error: {0}")]
    Git(String),

    /// Path has no stage-0 entry in the index.
    #[error("Path not staged: {0}")]
    NotStaged(String),

    /// Large-file smudge filter failed.
    #[error("Smudge filter failed: {0}")]
    Filter(String),

    /// Staged text document is not valid UTF-8.
    #[error("Staged content is not valid UTF-8: {path}")]
    InvalidUtf8 {
        /// Repository-relative path of the document.
        path: String,
    },

    /// A package required by a source rule is absent from the manifest.
    #[error("Dependency missing from manifest: {0}")]
    MissingDependency(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
