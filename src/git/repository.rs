use git2::{Oid, Repository};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{FameError, Result};
use crate::git::AttributionSource;
use crate::models::{LastCommit, TrackedFile};

pub struct GitRepository {
    pub repo: Mutex<Repository>,
    /// Working directory (or git dir for bare repositories), passed to `git -C`
    pub root: PathBuf,
}

impl GitRepository {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let repo = Repository::discover(&path).map_err(|_| FameError::RepoNotFound(path_str))?;
        let root = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        Ok(Self {
            repo: Mutex::new(repo),
            root,
        })
    }

    pub fn with_repo<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Repository) -> Result<T>,
    {
        let repo = self.repo.lock().map_err(|_| FameError::Internal("Lock poisoned".to_string()))?;
        f(&repo)
    }

    pub fn resolve(&self, revision: &str) -> Result<Oid> {
        self.with_repo(|repo| {
            let commit = repo
                .revparse_single(revision)
                .and_then(|obj| obj.peel_to_commit())
                .map_err(|e| FameError::InvalidRevision(format!("{} ({})", revision, e.message())))?;
            Ok(commit.id())
        })
    }
}

impl AttributionSource for GitRepository {
    fn resolve_revision(&self, revision: &str) -> Result<String> {
        Ok(self.resolve(revision)?.to_string())
    }

    fn list_tracked_files(&self, revision: &str) -> Result<Vec<TrackedFile>> {
        self.get_tracked_files(revision)
    }

    fn raw_attribution(&self, revision: &str, path: &str) -> Result<String> {
        self.blame_porcelain(revision, path)
    }

    fn last_commit_info(&self, revision: &str, path: &str) -> Result<LastCommit> {
        self.get_last_commit(revision, path)
    }
}
