//! Attribution for files without lines.
//!
//! An empty file still has provenance: it belongs to whoever last committed it.
//! It counts toward that contributor's commits and files, never toward lines.

use crate::models::{ContributorMode, ContributorStats, LastCommit, StatsMap};

pub fn attribute_empty_file(path: &str, last: &LastCommit, mode: ContributorMode) -> StatsMap {
    let name = last.name_for(mode);
    let mut owner = ContributorStats::new(name);
    owner.record_ownership(&last.oid, path);

    let mut stats = StatsMap::new();
    stats.insert(name.to_string(), owner);
    stats
}
