//! Attribution core: turn blame output into per-contributor totals and rank them.
//!
//! - `parser`: porcelain blame -> per-file stats
//! - `empty`: per-file stats for files without lines
//! - `aggregate`: order-independent merge of per-file stats
//! - `rank`: deterministic multi-key ordering

pub mod aggregate;
pub mod empty;
pub mod parser;
pub mod rank;

pub use aggregate::{merge_into, Aggregator};
pub use empty::attribute_empty_file;
pub use parser::parse_porcelain;
pub use rank::{rank, rank_entries};

use crate::error::Result;
use crate::git::AttributionSource;
use crate::models::{ContributorMode, StatsMap, TrackedFile};

/// Attribute a single file at `revision`.
///
/// Zero-size files go straight to their last commit. A non-empty file whose
/// blame yields no lines is treated the same way; that fallback is a heuristic
/// for blame streams git reports without content, not a guaranteed semantic.
pub fn attribute_file(
    source: &dyn AttributionSource,
    revision: &str,
    file: &TrackedFile,
    mode: ContributorMode,
) -> Result<StatsMap> {
    if file.is_empty() {
        let last = source.last_commit_info(revision, &file.path)?;
        return Ok(attribute_empty_file(&file.path, &last, mode));
    }

    let raw = source.raw_attribution(revision, &file.path)?;
    let stats = parse_porcelain(&raw, &file.path, mode)?;
    if !stats.is_empty() {
        return Ok(stats);
    }

    tracing::debug!(
        "No blame lines for non-empty {} ({} bytes), using last commit",
        file.path,
        file.size
    );
    let last = source.last_commit_info(revision, &file.path)?;
    Ok(attribute_empty_file(&file.path, &last, mode))
}
