//! Fold per-file stats into the global per-contributor map.
//!
//! Merging adds line counts and unions commit/file sets, so the result does not
//! depend on the order in which files are folded in.

use crate::models::{RankKey, RankedEntry, StatsMap};

#[derive(Debug, Default)]
pub struct Aggregator {
    stats: StatsMap,
    files: usize,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the stats of one file.
    pub fn merge_file(&mut self, file_stats: StatsMap) {
        self.files += 1;
        merge_into(&mut self.stats, file_stats);
    }

    /// Number of files merged so far
    pub fn files_merged(&self) -> usize {
        self.files
    }

    pub fn contributors(&self) -> usize {
        self.stats.len()
    }

    pub fn into_stats(self) -> StatsMap {
        self.stats
    }

    pub fn rank(&self, key: RankKey) -> Vec<RankedEntry> {
        super::rank::rank(&self.stats, key)
    }
}

pub fn merge_into(total: &mut StatsMap, partial: StatsMap) {
    for (name, file_stat) in partial {
        match total.get_mut(&name) {
            Some(existing) => existing.merge(file_stat),
            None => {
                total.insert(name, file_stat);
            }
        }
    }
}
