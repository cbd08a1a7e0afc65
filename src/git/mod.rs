//! Version-control layer.
//!
//! `AttributionSource` is everything the attribution core needs from git.
//! `GitRepository` implements it with libgit2 for tree and history queries and
//! the `git` binary for porcelain blame.

pub mod blame;
pub mod history;
pub mod repository;
pub mod tree;

pub use repository::GitRepository;

use crate::error::Result;
use crate::models::{LastCommit, TrackedFile};

pub trait AttributionSource: Send + Sync {
    /// Resolve a revision (branch, tag, hash) to a full commit id.
    /// Fails with `InvalidRevision`.
    fn resolve_revision(&self, revision: &str) -> Result<String>;

    /// All blobs reachable from the revision's tree.
    fn list_tracked_files(&self, revision: &str) -> Result<Vec<TrackedFile>>;

    /// Porcelain blame of `path`. Fails with `Attribution`.
    fn raw_attribution(&self, revision: &str, path: &str) -> Result<String>;

    /// Most recent commit at or before `revision` touching `path`.
    /// Fails with `HistoryLookup`.
    fn last_commit_info(&self, revision: &str, path: &str) -> Result<LastCommit>;
}
