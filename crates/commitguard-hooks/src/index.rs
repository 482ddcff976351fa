// Rust guideline compliant 2026-10-18

//! Staged content read from the git index.

use crate::lfs;
use commitguard_core::{Error, Result, StagedContentSource};
use git2::{Index, Repository};
use std::path::{Path, PathBuf};

/// Reads staged blobs from a repository's index.
///
/// Working-tree files are never consulted; only the stage-0 index entries.
pub struct GitIndexSource {
    repo: Repository,
    workdir: PathBuf,
    index_file: Option<PathBuf>,
    smudge_command: Vec<String>,
}

impl GitIndexSource {
    /// Opens the repository containing `path`.
    ///
    /// Honors `GIT_INDEX_FILE`, which git sets for hooks during partial commits.
    ///
    /// # Errors
    ///
    /// Returns an error if no repository is found or it has no working directory.
    pub fn discover(path: &Path, smudge_command: Vec<String>) -> Result<Self> {
        let repo = Repository::discover(path).map_err(git_error)?;
        Self::new(repo, smudge_command)
    }

    /// Wraps an opened repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository is bare.
    pub fn new(repo: Repository, smudge_command: Vec<String>) -> Result<Self> {
        let workdir = repo
            .workdir()
            .ok_or_else(|| Error::Git("repository has no working directory".to_string()))?
            .to_path_buf();
        let index_file = std::env::var_os("GIT_INDEX_FILE").map(PathBuf::from);
        Ok(Self {
            repo,
            workdir,
            index_file,
            smudge_command,
        })
    }

    /// Reads from an explicit index file instead of the repository default.
    ///
    /// Relative paths are resolved against the working directory root.
    pub fn with_index_file(mut self, index_file: Option<PathBuf>) -> Self {
        self.index_file = index_file;
        self
    }

    fn index(&self) -> Result<Index> {
        match &self.index_file {
            Some(file) => {
                let file = if file.is_relative() {
                    self.workdir.join(file)
                } else {
                    file.clone()
                };
                tracing::debug!(index = %file.display(), "using alternate index file");
                Index::open(&file).map_err(git_error)
            }
            None => self.repo.index().map_err(git_error),
        }
    }
}

impl StagedContentSource for GitIndexSource {
    fn read(&self, path: &str) -> Result<Vec<u8>> {
        let index = self.index()?;
        let entry = index
            .get_path(Path::new(path), 0)
            .ok_or_else(|| Error::NotStaged(path.to_string()))?;
        let blob = self.repo.find_blob(entry.id).map_err(git_error)?;
        tracing::debug!(path, size = blob.size(), "read staged blob");
        Ok(blob.content().to_vec())
    }

    fn read_through_filter(&self, path: &str) -> Result<Vec<u8>> {
        let staged = self.read(path)?;
        if !lfs::is_pointer(&staged) {
            return Ok(staged);
        }
        lfs::smudge(&self.smudge_command, &self.workdir, path, &staged)
    }
}

fn git_error(err: git2::Error) -> Error {
    Error::Git(err.message().to_string())
}
