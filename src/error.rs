//! Application error types and exit-status policy.
//!
//! Defines `FameError` for all error conditions. Errors fall in two classes:
//! - per-file (`Attribution`, `HistoryLookup`): the file is skipped with a warning
//!   and the run continues
//! - everything else: the run aborts with a diagnostic and exit status 1

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FameError {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Repository not found: {0}")]
    RepoNotFound(String),

    #[error("Invalid revision: {0}")]
    InvalidRevision(String),

    #[error("Attribution failed for {path}: {reason}")]
    Attribution { path: String, reason: String },

    #[error("History lookup failed for {path}: {reason}")]
    HistoryLookup { path: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Run cancelled: {0}")]
    Cancelled(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl FameError {
    pub fn attribution(path: &str, reason: impl ToString) -> Self {
        FameError::Attribution {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn history_lookup(path: &str, reason: impl ToString) -> Self {
        FameError::HistoryLookup {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Per-file errors skip the offending file; they never abort the run.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            FameError::Attribution { .. } | FameError::HistoryLookup { .. }
        )
    }
}

impl From<serde_json::Error> for FameError {
    fn from(err: serde_json::Error) -> Self {
        FameError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FameError>;
