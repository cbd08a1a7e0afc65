//! Files and commits as reported by the version-control layer.

use crate::models::ContributorMode;

/// A blob tracked at the analysed revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedFile {
    /// Path relative to the repository root, `/`-separated
    pub path: String,
    /// Blob size in bytes at the analysed revision
    pub size: u64,
}

impl TrackedFile {
    pub fn new(path: impl Into<String>, size: u64) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

/// The most recent commit touching a path, used to attribute empty files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastCommit {
    pub oid: String,
    pub author: String,
    pub committer: String,
}

impl LastCommit {
    pub fn name_for(&self, mode: ContributorMode) -> &str {
        match mode {
            ContributorMode::Author => &self.author,
            ContributorMode::Committer => &self.committer,
        }
    }
}
