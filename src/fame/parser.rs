//! Parser for `git blame --porcelain` output.
//!
//! The stream is a sequence of blocks:
//!
//! ```text
//! <sha> <orig-line> <final-line> [<group-size>]
//! author Alice
//! author-mail <alice@example.com>
//! ...
//! committer Bob
//! ...
//! filename src/lib.rs
//! \t<line content>
//! ```
//!
//! Metadata lines are only emitted the first time a commit appears, so later
//! blocks for the same commit carry just the header and the content line. The
//! parser remembers the name seen for every commit while it walks one file.

use std::collections::HashMap;

use crate::error::{FameError, Result};
use crate::models::{ContributorMode, ContributorStats, StatsMap};

const AUTHOR_PREFIX: &str = "author ";
const COMMITTER_PREFIX: &str = "committer ";

/// Parse the porcelain blame of `path` into per-contributor stats for that file.
///
/// One line is attributed per content line. A stream with no content lines
/// yields an empty map; the caller decides how to attribute such a file.
pub fn parse_porcelain(raw: &str, path: &str, mode: ContributorMode) -> Result<StatsMap> {
    let prefix = match mode {
        ContributorMode::Author => AUTHOR_PREFIX,
        ContributorMode::Committer => COMMITTER_PREFIX,
    };

    let mut names: HashMap<&str, &str> = HashMap::new();
    let mut stats = StatsMap::new();

    let mut commit: Option<&str> = None;
    let mut name: Option<&str> = None;

    for (idx, line) in raw.lines().enumerate() {
        if line.is_empty() {
            continue;
        }

        if line.starts_with('\t') {
            let Some(sha) = commit.take() else {
                return Err(FameError::attribution(
                    path,
                    format!("content at line {} has no block header", idx + 1),
                ));
            };

            let who = match name.take() {
                Some(found) => {
                    names.insert(sha, found);
                    found
                }
                None => *names.get(sha).ok_or_else(|| {
                    FameError::attribution(path, format!("no {}name for commit {}", prefix, sha))
                })?,
            };

            stats
                .entry(who.to_string())
                .or_insert_with(|| ContributorStats::new(who))
                .record_line(sha, path);
            continue;
        }

        match commit {
            None => {
                let sha = line.split_whitespace().next().ok_or_else(|| {
                    FameError::attribution(path, format!("malformed header at line {}", idx + 1))
                })?;
                commit = Some(sha);
            }
            Some(_) if name.is_none() => {
                if let Some(rest) = line.strip_prefix(prefix) {
                    name = Some(rest.trim());
                }
            }
            Some(_) => {}
        }
    }

    Ok(stats)
}
