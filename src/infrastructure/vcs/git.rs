//! Git Version Control
//!
//! Implements the VersionControl port with the `git` command line.
//! Every query runs with the repository root as its working directory, so
//! relative source paths resolve the same way regardless of where the tool
//! was started.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use crate::domain::ports::{VcsError, VersionControl};
use crate::domain::value_objects::Revision;

/// Version control backed by the `git` binary
#[derive(Debug, Clone, Default)]
pub struct GitCli;

impl GitCli {
    pub fn new() -> Self {
        Self
    }

    fn run(repo_root: &Path, args: &[&str], paths: &[&Path]) -> Result<Output, VcsError> {
        let output = Command::new("git")
            .current_dir(repo_root)
            .args(args)
            .arg("--")
            .args(paths)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| VcsError::Unavailable(format!("git: {}", e)))?;

        if !output.status.success() {
            return Err(VcsError::QueryFailed {
                command: format!("git {}", args.join(" ")),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output)
    }
}

impl VersionControl for GitCli {
    fn has_pending_changes(&self, repo_root: &Path, path: &Path) -> Result<bool, VcsError> {
        let output = Self::run(repo_root, &["status", "--porcelain"], &[path])?;
        let pending = !output.stdout.iter().all(u8::is_ascii_whitespace);
        tracing::trace!(path = %path.display(), pending, "git status");
        Ok(pending)
    }

    fn last_revision(
        &self,
        repo_root: &Path,
        paths: &[PathBuf],
    ) -> Result<Option<Revision>, VcsError> {
        let paths: Vec<&Path> = paths.iter().map(PathBuf::as_path).collect();
        let output = Self::run(repo_root, &["log", "-1", "--format=format:%H"], &paths)?;
        Ok(Revision::parse(&String::from_utf8_lossy(&output.stdout)))
    }
}
