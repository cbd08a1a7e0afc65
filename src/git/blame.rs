//! Porcelain blame via the `git` binary.

use std::process::Command;

use crate::error::{FameError, Result};
use crate::git::repository::GitRepository;

impl GitRepository {
    pub fn blame_porcelain(&self, revision: &str, path: &str) -> Result<String> {
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.root)
            .args(["blame", "--porcelain", "-l", revision, "--", path])
            .output()
            .map_err(|e| FameError::attribution(path, format!("failed to run git blame: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FameError::attribution(
                path,
                format!("git blame exited with {}: {}", output.status, stderr.trim()),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
