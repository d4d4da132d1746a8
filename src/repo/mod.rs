// Repository acquisition: URL checks, cloning and cleanup

pub mod git;

pub use git::{GitCli, GitClient};

use crate::config::RepositoryConfig;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use url::Url;

/// Hosts accepted by [`validate_url`]
pub const ALLOWED_HOSTS: &[&str] = &["github.com", "www.github.com"];

/// Name returned when a URL has no usable repository segment
pub const UNKNOWN_REPOSITORY: &str = "unknown";

/// Non-empty path segments of a parsed URL
fn path_segments(url: &Url) -> Vec<&str> {
    url.path().split('/').filter(|s| !s.is_empty()).collect()
}

/// Check that a URL points at an owner/repository on the expected host
///
/// Only host and path are checked; the scheme is not, so
/// `ftp://github.com/owner/repo` passes.
pub fn validate_url(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };

    let host_ok = parsed
        .host_str()
        .map_or(false, |host| ALLOWED_HOSTS.contains(&host));

    host_ok && path_segments(&parsed).len() >= 2
}

/// Human-readable repository name, e.g. `my-repo` for `.../owner/my-repo.git`
pub fn repository_name(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return UNKNOWN_REPOSITORY.to_string();
    };

    let segments = path_segments(&parsed);
    if segments.len() < 2 {
        return UNKNOWN_REPOSITORY.to_string();
    }

    let last = segments[segments.len() - 1];
    let name = last.strip_suffix(".git").unwrap_or(last);
    if name.is_empty() {
        UNKNOWN_REPOSITORY.to_string()
    } else {
        name.to_string()
    }
}

/// Recursively delete a directory; a missing directory counts as removed
pub fn cleanup(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Ok(());
    }

    std::fs::remove_dir_all(dir).map_err(|source| {
        tracing::warn!("Error cleaning up {}: {}", dir.display(), source);
        Error::Cleanup {
            path: dir.to_path_buf(),
            source,
        }
    })
}

/// Clones remote repositories into local working copies
pub struct RepoFetcher<G = GitCli> {
    git: G,
    temp_prefix: String,
}

impl RepoFetcher<GitCli> {
    /// Fetcher backed by the `git` CLI
    pub fn new(config: &RepositoryConfig) -> Self {
        Self::with_client(GitCli::new(), config)
    }
}

impl<G: GitClient> RepoFetcher<G> {
    pub fn with_client(git: G, config: &RepositoryConfig) -> Self {
        Self {
            git,
            temp_prefix: config.temp_prefix.clone(),
        }
    }

    /// Clone `url` into `target`, or into a fresh temporary directory
    ///
    /// An invalid URL fails with [`Error::InvalidUrl`] before the client is
    /// touched. A temporary directory created here is removed again if the
    /// clone fails.
    pub fn clone_repository(&self, url: &str, target: Option<&Path>) -> Result<PathBuf> {
        if !validate_url(url) {
            return Err(Error::InvalidUrl(url.to_string()));
        }

        let (dest, created) = match target {
            Some(dir) => (dir.to_path_buf(), false),
            None => {
                let dir = tempfile::Builder::new()
                    .prefix(&self.temp_prefix)
                    .tempdir()
                    .map_err(|e| {
                        tracing::error!("Cannot create clone directory: {}", e);
                        Error::Io(e)
                    })?;
                (dir.into_path(), true)
            }
        };

        tracing::info!("Cloning {} into {}", url, dest.display());

        match self.git.clone_repo(url, &dest) {
            Ok(()) => {
                tracing::info!("Cloned {}", repository_name(url));
                Ok(dest)
            }
            Err(e) => {
                tracing::error!("Error cloning repository: {}", e);
                if created {
                    let _ = cleanup(&dest);
                }
                Err(e)
            }
        }
    }
}
