use git2::{ErrorCode, Oid, Repository};
use std::collections::{BinaryHeap, HashSet};
use std::path::Path;

use crate::error::{FameError, Result};
use crate::git::repository::GitRepository;
use crate::models::LastCommit;

impl GitRepository {
    /// Most recent commit reachable from `revision` that changed `path`.
    ///
    /// Follows `git log -1 <revision> -- <path>`: a merge whose entry for the
    /// path equals one of its parents' is skipped, and only that parent's
    /// history is followed.
    pub fn get_last_commit(&self, revision: &str, path: &str) -> Result<LastCommit> {
        let oid = self.resolve(revision)?;
        self.with_repo(|repo| {
            find_last_commit(repo, oid, path).map_err(|e| match e {
                FameError::Git(err) => FameError::history_lookup(path, err.message()),
                other => other,
            })
        })
    }
}

/// Blob id and file mode of `path` in a commit's tree, `None` when absent.
type PathEntry = Option<(Oid, i32)>;

fn find_last_commit(repo: &Repository, start: Oid, path: &str) -> Result<LastCommit> {
    let target = Path::new(path);

    // Newest first by committer time
    let mut queue = BinaryHeap::new();
    let mut seen = HashSet::new();
    queue.push((repo.find_commit(start)?.time().seconds(), start));
    seen.insert(start);

    while let Some((_, oid)) = queue.pop() {
        let commit = repo.find_commit(oid)?;
        let entry = entry_at(&commit, target)?;

        let mut parents = Vec::with_capacity(commit.parent_count());
        for parent in commit.parents() {
            let parent_entry = entry_at(&parent, target)?;
            parents.push((parent, parent_entry));
        }

        match parents.iter().find(|(_, parent_entry)| *parent_entry == entry) {
            Some((same, _)) => {
                if seen.insert(same.id()) {
                    queue.push((same.time().seconds(), same.id()));
                }
            }
            None if parents.is_empty() && entry.is_none() => {}
            None => return Ok(commit_to_last(&commit)),
        }
    }

    Err(FameError::history_lookup(path, "no commit touches this path"))
}

fn entry_at(commit: &git2::Commit, path: &Path) -> Result<PathEntry> {
    let tree = commit.tree()?;
    match tree.get_path(path) {
        Ok(entry) => Ok(Some((entry.id(), entry.filemode()))),
        Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn commit_to_last(commit: &git2::Commit) -> LastCommit {
    LastCommit {
        oid: commit.id().to_string(),
        author: commit.author().name().unwrap_or("Unknown").to_string(),
        committer: commit.committer().name().unwrap_or("Unknown").to_string(),
    }
}
