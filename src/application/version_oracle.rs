//! Version Oracle
//!
//! Derives an artifact's version from version control history instead of
//! content hashing. A dirty source path poisons the whole set: the oracle
//! never hands out a real revision for a tree that does not match it.

use std::path::{Path, PathBuf};

use crate::domain::ports::{VcsError, VersionControl};
use crate::domain::value_objects::SourceVersion;

pub struct VersionOracle<'a, V: VersionControl> {
    vcs: &'a V,
    repo_root: &'a Path,
}

impl<'a, V: VersionControl> VersionOracle<'a, V> {
    pub fn new(vcs: &'a V, repo_root: &'a Path) -> Self {
        Self { vcs, repo_root }
    }

    /// Compute the version of `paths` (relative to the repository root)
    pub fn compute(&self, paths: &[PathBuf]) -> Result<SourceVersion, VcsError> {
        if paths.is_empty() {
            return Ok(SourceVersion::Untracked);
        }

        for path in paths {
            if self.vcs.has_pending_changes(self.repo_root, path)? {
                tracing::debug!(path = %path.display(), "uncommitted changes");
                return Ok(SourceVersion::Dirty);
            }
        }

        Ok(match self.vcs.last_revision(self.repo_root, paths)? {
            Some(rev) => SourceVersion::Committed(rev),
            None => SourceVersion::Untracked,
        })
    }
}
