//! Version-control client used to fetch remote repositories.

use crate::error::{Error, Result};
use std::path::Path;
use std::process::Command;

/// Fetches a full working copy of a remote repository.
///
/// Kept behind a trait so acquisition can be exercised without a network.
pub trait GitClient {
    /// Clone `url` into `dest`, which must be absent or an empty directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Clone`] when the remote cannot be fetched.
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()>;
}

/// Client that shells out to the `git` CLI.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
}

impl GitCli {
    pub fn new() -> Self {
        Self {
            program: "git".to_string(),
        }
    }

    /// Use a specific git executable
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl GitClient for GitCli {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        let output = Command::new(&self.program)
            .args(["clone", "--quiet", "--", url])
            .arg(dest)
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|e| Error::clone_failed(url, format!("cannot run {}: {e}", self.program)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::clone_failed(url, stderr.trim()));
        }
        Ok(())
    }
}
