//! Deterministic ordering of contributors.
//!
//! Each entry becomes a tuple of (lines, commits, files) with the ranking key
//! moved to the front. Tuples compare descending; full ties fall back to the
//! case-insensitive name, then the exact name, so no two entries compare equal.

use std::cmp::Ordering;

use crate::models::{RankKey, RankedEntry, StatsMap};

pub fn rank(stats: &StatsMap, key: RankKey) -> Vec<RankedEntry> {
    rank_entries(stats.values().map(|s| s.snapshot()).collect(), key)
}

pub fn rank_entries(mut entries: Vec<RankedEntry>, key: RankKey) -> Vec<RankedEntry> {
    entries.sort_by(|a, b| compare(a, b, key));
    entries
}

fn sort_tuple(entry: &RankedEntry, key: RankKey) -> [usize; 3] {
    let RankedEntry {
        lines,
        commits,
        files,
        ..
    } = *entry;
    match key {
        RankKey::Lines => [lines, commits, files],
        RankKey::Commits => [commits, lines, files],
        RankKey::Files => [files, lines, commits],
    }
}

pub fn compare(a: &RankedEntry, b: &RankedEntry, key: RankKey) -> Ordering {
    sort_tuple(b, key)
        .cmp(&sort_tuple(a, key))
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}
