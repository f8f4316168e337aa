use std::path::{Path, PathBuf};

use pk3deploy::config::DEFAULT_CONFIG_FILE;

/// Discover the repository root from an invocation directory.
///
/// Heuristics (first match wins, walking upward from `start`):
/// - `deploy.toml` (the deploy configuration)
/// - `.git/` or `.git` file (git repo root / worktree)
///
/// Falls back to `start` when no markers are found.
pub(crate) fn discover_repo_root(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        if dir.join(DEFAULT_CONFIG_FILE).is_file() {
            return dir.to_path_buf();
        }
        if dir.join(".git").exists() {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}
