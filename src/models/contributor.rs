//! Per-contributor statistics and their ranked snapshot.
//!
//! - `ContributorStats`: mutable accumulator (lines, distinct commits, distinct files)
//! - `RankedEntry`: immutable snapshot handed to the presenter
//! - `ContributorMode`: whether blame names the author or the committer
//! - `RankKey`: the statistic promoted to the front of the sort tuple

use clap::ValueEnum;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ContributorMode {
    #[default]
    Author,
    Committer,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RankKey {
    #[default]
    Lines,
    Commits,
    Files,
}

/// Accumulated attribution for one contributor identity.
///
/// `lines` only counts line attributions. `commits` and `files` grow on any
/// attribution, including the synthetic one recorded for an empty file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributorStats {
    pub name: String,
    pub lines: usize,
    pub commits: HashSet<String>,
    pub files: HashSet<String>,
}

/// Contributor name -> stats. Keys are exact, un-normalised display names.
pub type StatsMap = HashMap<String, ContributorStats>;

impl ContributorStats {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: 0,
            commits: HashSet::new(),
            files: HashSet::new(),
        }
    }

    /// Attribute one line of `file` to this contributor via `commit`.
    pub fn record_line(&mut self, commit: &str, file: &str) {
        self.lines += 1;
        self.record_ownership(commit, file);
    }

    /// Record commit and file membership without counting a line.
    pub fn record_ownership(&mut self, commit: &str, file: &str) {
        if !self.commits.contains(commit) {
            self.commits.insert(commit.to_string());
        }
        if !self.files.contains(file) {
            self.files.insert(file.to_string());
        }
    }

    /// Fold `other` into `self`: lines add, commit and file sets union.
    pub fn merge(&mut self, other: ContributorStats) {
        self.lines += other.lines;
        self.commits.extend(other.commits);
        self.files.extend(other.files);
    }

    pub fn snapshot(&self) -> RankedEntry {
        RankedEntry {
            name: self.name.clone(),
            lines: self.lines,
            commits: self.commits.len(),
            files: self.files.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub name: String,
    pub lines: usize,
    pub commits: usize,
    pub files: usize,
}

impl RankedEntry {
    pub fn new(name: impl Into<String>, lines: usize, commits: usize, files: usize) -> Self {
        Self {
            name: name.into(),
            lines,
            commits,
            files,
        }
    }
}
