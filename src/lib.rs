//! Attribute every line of a repository at a revision to its last author or
//! committer and rank contributors by lines, commits and files.
//!
//! The binary in `main.rs` is a thin clap layer over [`pipeline::analyze_repository`].

pub mod config;
pub mod error;
pub mod fame;
pub mod filter;
pub mod git;
pub mod models;
pub mod output;
pub mod pipeline;

pub use error::{FameError, Result};
pub use pipeline::{analyze, analyze_repository, FameOptions, FameReport, SkippedFile};
