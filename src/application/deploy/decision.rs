//! Build and deploy decisions
//!
//! Pure functions over the computed source version. Reading the local or
//! remote embedded version is passed in lazily so it only happens when the
//! decision actually depends on it.

use crate::domain::ports::SkipReason;
use crate::domain::value_objects::{BuildMode, Revision, SourceVersion};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Skip(SkipReason),
}

/// Whether an artifact gets (re)built
///
/// Debug builds always rebuild. Release builds need a committed version
/// that differs from the one stamped in the local archive.
pub fn build_decision(
    mode: BuildMode,
    version: &SourceVersion,
    local: impl FnOnce() -> Option<Revision>,
) -> Decision {
    if mode.is_debug() {
        return Decision::Proceed;
    }
    if !version.is_committed() {
        return Decision::Skip(SkipReason::UncommittedChanges);
    }
    if version.matches(local().as_ref()) {
        return Decision::Skip(SkipReason::UpToDate);
    }
    Decision::Proceed
}

/// Whether a built artifact gets pushed to the server
///
/// A dirty or untracked tree never deploys, in either mode. Debug deploys
/// whatever was built without looking at the remote copy.
pub fn deploy_decision(
    mode: BuildMode,
    version: &SourceVersion,
    archive_exists: bool,
    remote: impl FnOnce() -> Option<Revision>,
) -> Decision {
    if !version.is_committed() || !archive_exists {
        return Decision::Skip(SkipReason::NotBuilt);
    }
    if mode.is_debug() {
        return Decision::Proceed;
    }
    if version.matches(remote().as_ref()) {
        return Decision::Skip(SkipReason::UpToDate);
    }
    Decision::Proceed
}
