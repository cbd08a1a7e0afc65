//! End-to-end run: resolve revision, select files, attribute them in parallel,
//! fold the results and rank.
//!
//! Workers run blame on a bounded set of blocking tasks. Only this task touches
//! the aggregate: results are merged one at a time as workers finish, so the
//! ranking does not depend on completion order.

use std::path::Path;
use std::sync::Arc;

use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::{FameError, Result};
use crate::fame::{attribute_file, Aggregator};
use crate::filter::FileFilter;
use crate::git::{AttributionSource, GitRepository};
use crate::models::{ContributorMode, RankKey, RankedEntry};

#[derive(Debug, Clone)]
pub struct FameOptions {
    pub revision: String,
    pub rank_key: RankKey,
    pub mode: ContributorMode,
    pub filter: FileFilter,
    /// Maximum number of files attributed concurrently
    pub jobs: usize,
}

impl Default for FameOptions {
    fn default() -> Self {
        Self {
            revision: "HEAD".to_string(),
            rank_key: RankKey::default(),
            mode: ContributorMode::default(),
            filter: FileFilter::default(),
            jobs: default_jobs(),
        }
    }
}

pub fn default_jobs() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

/// A file left out of the aggregate because its attribution failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct FameReport {
    pub ranking: Vec<RankedEntry>,
    pub files_analysed: usize,
    pub skipped: Vec<SkippedFile>,
}

/// Open the repository at `repo_path` and run the analysis.
pub async fn analyze_repository(
    repo_path: &Path,
    options: &FameOptions,
    cancel: CancellationToken,
) -> Result<FameReport> {
    let repo = GitRepository::open(repo_path)?;
    info!("Analyzing {} at {}", repo.root.display(), options.revision);
    analyze(Arc::new(repo), options, cancel).await
}

pub async fn analyze(
    source: Arc<dyn AttributionSource>,
    options: &FameOptions,
    cancel: CancellationToken,
) -> Result<FameReport> {
    let revision = source.resolve_revision(&options.revision)?;
    let tracked = source.list_tracked_files(&revision)?;
    let total = tracked.len();
    let files = options.filter.apply(tracked);
    info!("{} of {} tracked files selected at {}", files.len(), total, revision);

    let jobs = options.jobs.max(1);
    let mode = options.mode;
    let revision: Arc<str> = revision.into();

    let mut pending = files.into_iter();
    let mut tasks = JoinSet::new();
    let mut aggregator = Aggregator::new();
    let mut skipped = Vec::new();

    loop {
        while tasks.len() < jobs {
            let Some(file) = pending.next() else {
                break;
            };
            let source = Arc::clone(&source);
            let revision = Arc::clone(&revision);
            tasks.spawn_blocking(move || {
                debug!("Attributing {}", file.path);
                let result = attribute_file(source.as_ref(), &revision, &file, mode);
                (file.path, result)
            });
        }

        let joined = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tasks.abort_all();
                return Err(FameError::Cancelled(format!(
                    "{} files still pending",
                    tasks.len() + pending.len()
                )));
            }
            joined = tasks.join_next() => joined,
        };

        let Some(joined) = joined else {
            break;
        };
        let (path, result) =
            joined.map_err(|e| FameError::Internal(format!("Attribution worker failed: {}", e)))?;

        match result {
            Ok(file_stats) => aggregator.merge_file(file_stats),
            Err(e) if e.is_per_file() => {
                warn!("Skipping {}: {}", path, e);
                skipped.push(SkippedFile {
                    path,
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        "Analyzed {} files ({} skipped), {} contributors",
        aggregator.files_merged(),
        skipped.len(),
        aggregator.contributors()
    );

    skipped.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(FameReport {
        ranking: aggregator.rank(options.rank_key),
        files_analysed: aggregator.files_merged(),
        skipped,
    })
}
