// Rust guideline compliant 2026-10-18

//! Staged content retrieval.
//!
//! The guard only ever sees content through [`StagedContentSource`], so rule
//! evaluation never touches the working tree directly.

use crate::{Error, Result};
use std::collections::HashMap;

/// Source of file content as staged for the next commit.
pub trait StagedContentSource {
    /// Returns the exact staged bytes of `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not staged or cannot be read.
    fn read(&self, path: &str) -> Result<Vec<u8>>;

    /// Returns the staged bytes of `path` after the large-file smudge step.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not staged or decoding fails.
    fn read_through_filter(&self, path: &str) -> Result<Vec<u8>>;
}

/// In-memory staged content, keyed by repository-relative path.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    staged: HashMap<String, Vec<u8>>,
    decoded: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages `content` at `path`.
    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.staged.insert(path.into(), content.into());
        self
    }

    /// Stages a large-file pointer at `path` that decodes to `content`.
    pub fn with_filtered_file(
        mut self,
        path: impl Into<String>,
        pointer: impl Into<Vec<u8>>,
        content: impl Into<Vec<u8>>,
    ) -> Self {
        let path = path.into();
        self.staged.insert(path.clone(), pointer.into());
        self.decoded.insert(path, content.into());
        self
    }
}

impl StagedContentSource for MemorySource {
    fn read(&self, path: &str) -> Result<Vec<u8>> {
        self.staged
            .get(path)
            .cloned()
            .ok_or_else(|| Error::NotStaged(path.to_string()))
    }

    fn read_through_filter(&self, path: &str) -> Result<Vec<u8>> {
        let staged = self.read(path)?;
        Ok(self.decoded.get(path).cloned().unwrap_or(staged))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_path_is_not_staged() {
        let source = MemorySource::new();
        assert!(matches!(source.read("a.txt"), Err(Error::NotStaged(p)) if p == "a.txt"));
        assert!(source.read_through_filter("a.txt").is_err());
    }

    #[test]
    fn test_filter_falls_back_to_staged_bytes() {
        let source = MemorySource::new().with_file("a.txt", "plain");
        assert_eq!(source.read_through_filter("a.txt").unwrap(), b"plain");
    }

    #[test]
    fn test_filtered_file_keeps_pointer_for_raw_read() {
        let source = MemorySource::new().with_filtered_file("a.asset", "pointer", "decoded");
        assert_eq!(source.read("a.asset").unwrap(), b"pointer");
        assert_eq!(source.read_through_filter("a.asset").unwrap(), b"decoded");
    }
}
