//! Data model shared by the attribution core, the git layer and the presenter.
//!
//! - `contributor`: ContributorMode, RankKey, ContributorStats, RankedEntry
//! - `file`: TrackedFile, LastCommit

pub mod contributor;
pub mod file;

pub use contributor::*;
pub use file::*;
