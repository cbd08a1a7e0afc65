// Shared test fixtures for integration tests
#![allow(dead_code)]

use git2::{Repository, Signature};
use gitfame::error::{FameError, Result};
use gitfame::git::AttributionSource;
use gitfame::models::{LastCommit, TrackedFile};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering as AtomicOrdering};
use tempfile::TempDir;

static CLOCK: AtomicI64 = AtomicI64::new(1_700_000_000);

/// Create a temporary git repository
pub fn create_test_repo() -> (TempDir, PathBuf, Repository) {
    let dir = TempDir::new().unwrap();
    let repo_path = dir.path().to_path_buf();
    let repo = Repository::init(&repo_path).unwrap();

    let mut config = repo.config().unwrap();
    config.set_str("user.name", "Test User").unwrap();
    config.set_str("user.email", "test@example.com").unwrap();

    (dir, repo_path, repo)
}

/// Write files, stage them and commit as `author`, committed by `committer`
pub fn commit_as(
    repo: &Repository,
    author: &str,
    committer: &str,
    files: &[(&str, &[u8])],
    message: &str,
) -> git2::Oid {
    // Strictly increasing timestamps keep history order unambiguous
    let when = git2::Time::new(CLOCK.fetch_add(60, AtomicOrdering::SeqCst), 0);
    let author_sig =
        Signature::new(author, &format!("{}@example.com", author.to_lowercase()), &when).unwrap();
    let committer_sig =
        Signature::new(committer, &format!("{}@example.com", committer.to_lowercase()), &when)
            .unwrap();

    let mut index = repo.index().unwrap();
    for (path, content) in files {
        let full_path = repo.workdir().unwrap().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&full_path, content).unwrap();
        index.add_path(Path::new(path)).unwrap();
    }
    index.write().unwrap();

    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), &author_sig, &committer_sig, message, &tree, &parents)
        .unwrap()
}

/// Commit authored and committed by the same person
pub fn commit(repo: &Repository, author: &str, files: &[(&str, &[u8])], message: &str) -> git2::Oid {
    commit_as(repo, author, author, files, message)
}

/// Commit a full top-level tree with explicit parents, bypassing the index.
/// `update_ref` moves that ref (e.g. "HEAD") to the new commit.
pub fn commit_tree(
    repo: &Repository,
    author: &str,
    files: &[(&str, &[u8])],
    parents: &[git2::Oid],
    update_ref: Option<&str>,
    message: &str,
) -> git2::Oid {
    let when = git2::Time::new(CLOCK.fetch_add(60, AtomicOrdering::SeqCst), 0);
    let sig =
        Signature::new(author, &format!("{}@example.com", author.to_lowercase()), &when).unwrap();

    let mut builder = repo.treebuilder(None).unwrap();
    for (name, content) in files {
        let blob = repo.blob(content).unwrap();
        builder.insert(name, blob, 0o100644).unwrap();
    }
    let tree = repo.find_tree(builder.write().unwrap()).unwrap();

    let parents: Vec<git2::Commit> =
        parents.iter().map(|p| repo.find_commit(*p).unwrap()).collect();
    let parent_refs: Vec<&git2::Commit> = parents.iter().collect();

    repo.commit(update_ref, &sig, &sig, message, &tree, &parent_refs)
        .unwrap()
}

/// History where `empty.txt` arrives through a merge:
///
/// ```text
/// base (Alice) ── main: b.txt (Alice) ── merge (Carol)
///       └──────── side: empty.txt (Bob) ──┘
/// ```
///
/// Returns (side, merge).
pub fn merged_empty_file_history(repo: &Repository) -> (git2::Oid, git2::Oid) {
    let base = commit_tree(repo, "Alice", &[("a.txt", b"a\n")], &[], Some("HEAD"), "base");
    let side = commit_tree(
        repo,
        "Bob",
        &[("a.txt", b"a\n"), ("empty.txt", b"")],
        &[base],
        None,
        "add empty",
    );
    let main = commit_tree(
        repo,
        "Alice",
        &[("a.txt", b"a\n"), ("b.txt", b"b\n")],
        &[base],
        Some("HEAD"),
        "add b",
    );
    let merge = commit_tree(
        repo,
        "Carol",
        &[("a.txt", b"a\n"), ("b.txt", b"b\n"), ("empty.txt", b"")],
        &[main, side],
        Some("HEAD"),
        "merge side",
    );
    (side, merge)
}

/// One line of a fake blame: (commit id, author, committer)
pub type BlameLine<'a> = (&'a str, &'a str, &'a str);

/// Porcelain blame text for the given lines, metadata only on first sighting
pub fn porcelain(path: &str, lines: &[BlameLine]) -> String {
    let mut seen = std::collections::HashSet::new();
    let mut out = String::new();
    for (idx, (sha, author, committer)) in lines.iter().enumerate() {
        let n = idx + 1;
        if seen.insert(*sha) {
            out.push_str(&format!("{} {} {} 1\n", sha, n, n));
            out.push_str(&format!("author {}\n", author));
            out.push_str(&format!("author-mail <{}@example.com>\n", author));
            out.push_str("author-time 1700000000\nauthor-tz +0000\n");
            out.push_str(&format!("committer {}\n", committer));
            out.push_str(&format!("committer-mail <{}@example.com>\n", committer));
            out.push_str("committer-time 1700000000\ncommitter-tz +0000\n");
            out.push_str("summary test\n");
            out.push_str(&format!("filename {}\n", path));
        } else {
            out.push_str(&format!("{} {} {}\n", sha, n, n));
        }
        out.push_str(&format!("\tline {}\n", n));
    }
    out
}

enum FakeBlame {
    Raw(String),
    Fails,
}

/// In-memory `AttributionSource` for pipeline tests
#[derive(Default)]
pub struct FakeSource {
    files: Vec<TrackedFile>,
    blames: HashMap<String, FakeBlame>,
    last_commits: HashMap<String, LastCommit>,
    pub blame_calls: AtomicUsize,
    pub blame_delay: Option<std::time::Duration>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, path: &str, lines: &[BlameLine]) -> Self {
        let raw = porcelain(path, lines);
        self.files.push(TrackedFile::new(path, raw.len() as u64));
        self.blames.insert(path.to_string(), FakeBlame::Raw(raw));
        self
    }

    pub fn empty_file(mut self, path: &str, oid: &str, author: &str, committer: &str) -> Self {
        self.files.push(TrackedFile::new(path, 0));
        self.last_commits.insert(
            path.to_string(),
            LastCommit {
                oid: oid.to_string(),
                author: author.to_string(),
                committer: committer.to_string(),
            },
        );
        self
    }

    /// A non-empty file whose blame reports no lines
    pub fn blank_blame_file(mut self, path: &str, oid: &str, author: &str) -> Self {
        self.files.push(TrackedFile::new(path, 12));
        self.blames.insert(path.to_string(), FakeBlame::Raw(String::new()));
        self.last_commits.insert(
            path.to_string(),
            LastCommit {
                oid: oid.to_string(),
                author: author.to_string(),
                committer: author.to_string(),
            },
        );
        self
    }

    pub fn failing_file(mut self, path: &str) -> Self {
        self.files.push(TrackedFile::new(path, 10));
        self.blames.insert(path.to_string(), FakeBlame::Fails);
        self
    }

    pub fn with_delay(mut self, delay: std::time::Duration) -> Self {
        self.blame_delay = Some(delay);
        self
    }
}

impl AttributionSource for FakeSource {
    fn resolve_revision(&self, revision: &str) -> Result<String> {
        if revision == "HEAD" {
            Ok("ffffffffffffffffffffffffffffffffffffffff".to_string())
        } else {
            Err(FameError::InvalidRevision(revision.to_string()))
        }
    }

    fn list_tracked_files(&self, _revision: &str) -> Result<Vec<TrackedFile>> {
        Ok(self.files.clone())
    }

    fn raw_attribution(&self, _revision: &str, path: &str) -> Result<String> {
        self.blame_calls.fetch_add(1, AtomicOrdering::SeqCst);
        if let Some(delay) = self.blame_delay {
            std::thread::sleep(delay);
        }
        match self.blames.get(path) {
            Some(FakeBlame::Raw(raw)) => Ok(raw.clone()),
            Some(FakeBlame::Fails) => Err(FameError::attribution(path, "fatal: no such path")),
            None => Err(FameError::attribution(path, "unknown path")),
        }
    }

    fn last_commit_info(&self, _revision: &str, path: &str) -> Result<LastCommit> {
        self.last_commits
            .get(path)
            .cloned()
            .ok_or_else(|| FameError::history_lookup(path, "no commit touches this path"))
    }
}
