//! Version Control Port
//!
//! Queries the working tree status and commit history of source paths.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::Revision;

/// Version control query failure
///
/// Always fatal: it means the environment is broken, not that a path has
/// no history.
#[derive(Debug, Clone)]
pub enum VcsError {
    /// The version control tool could not be started
    Unavailable(String),
    /// The tool ran but reported an error
    QueryFailed { command: String, message: String },
}

impl std::fmt::Display for VcsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "version control unavailable: {}", msg),
            Self::QueryFailed { command, message } => {
                write!(f, "'{}' failed: {}", command, message)
            }
        }
    }
}

impl std::error::Error for VcsError {}

/// Trait for version control backends
pub trait VersionControl {
    /// True if `path` has uncommitted changes (modified, staged or untracked)
    fn has_pending_changes(&self, repo_root: &Path, path: &Path) -> Result<bool, VcsError>;

    /// Most recent revision touching any of `paths`, or `None` if none did
    fn last_revision(
        &self,
        repo_root: &Path,
        paths: &[PathBuf],
    ) -> Result<Option<Revision>, VcsError>;
}
