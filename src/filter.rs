//! File selection: extension allow-list, then exclude globs, then restrict globs.
//!
//! Globs match the whole repository-relative path and `*` never crosses `/`.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::collections::HashSet;

use crate::error::{FameError, Result};
use crate::models::TrackedFile;

#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    extensions: HashSet<String>,
    exclude: Option<GlobSet>,
    restrict_to: Option<GlobSet>,
}

impl FileFilter {
    pub fn new(extensions: &[String], exclude: &[String], restrict_to: &[String]) -> Result<Self> {
        let extensions = extensions
            .iter()
            .map(|ext| ext.trim())
            .filter(|ext| !ext.is_empty())
            .map(normalize_extension)
            .collect();

        Ok(Self {
            extensions,
            exclude: build_globset(exclude)?,
            restrict_to: build_globset(restrict_to)?,
        })
    }

    pub fn matches(&self, path: &str) -> bool {
        if !self.extensions.is_empty() {
            match extension_of(path) {
                Some(ext) if self.extensions.contains(&ext.to_lowercase()) => {}
                _ => return false,
            }
        }

        if let Some(exclude) = &self.exclude {
            if exclude.is_match(path) {
                return false;
            }
        }

        match &self.restrict_to {
            Some(restrict) => restrict.is_match(path),
            None => true,
        }
    }

    pub fn apply(&self, files: Vec<TrackedFile>) -> Vec<TrackedFile> {
        files.into_iter().filter(|f| self.matches(&f.path)).collect()
    }
}

fn normalize_extension(ext: &str) -> String {
    let ext = ext.to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{}", ext)
    }
}

/// Extension of the last path component including the dot, e.g. `.rs`.
fn extension_of(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next().unwrap_or(path);
    name.rfind('.').map(|idx| &name[idx..])
}

fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>> {
    let patterns: Vec<&str> = patterns
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect();
    if patterns.is_empty() {
        return Ok(None);
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|e| FameError::Config(format!("Invalid glob {:?}: {}", pattern, e)))?;
        builder.add(glob);
    }
    let set = builder
        .build()
        .map_err(|e| FameError::Config(format!("Failed to build globset: {}", e)))?;
    Ok(Some(set))
}
