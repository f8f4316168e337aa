//! Deploy Options

use std::path::{Path, PathBuf};

use crate::domain::value_objects::BuildMode;

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Repository root (git queries, manifest roots, relative extra files)
    pub repo_root: PathBuf,
    /// Build output directory (`B`)
    pub build_dir: PathBuf,
    /// Debug or release, derived from the build directory name
    pub mode: BuildMode,
}

impl DeployOptions {
    pub fn new(repo_root: impl Into<PathBuf>, build_dir: impl Into<PathBuf>) -> Self {
        let build_dir = build_dir.into();
        Self {
            mode: BuildMode::from_build_dir(&build_dir),
            repo_root: repo_root.into(),
            build_dir,
        }
    }

    pub fn with_mode(mut self, mode: BuildMode) -> Self {
        self.mode = mode;
        self
    }

    /// Directory archives are written to
    pub fn archive_dir(&self) -> PathBuf {
        self.build_dir.join("base")
    }

    pub fn archive_path(&self, name: &str) -> PathBuf {
        self.archive_dir().join(name)
    }

    /// Resolve a configured path against the repository root
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.repo_root.join(path)
        }
    }
}
