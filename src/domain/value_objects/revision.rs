//! Revision and Source Version Value Objects
//!
//! A `Revision` is an opaque commit identifier taken from version control.
//! A `SourceVersion` is the outcome of asking version control about a set of
//! source paths: a committed revision, a dirty working tree, or no history.

use std::fmt;

/// Commit identifier that last touched a set of source paths
///
/// Equality is byte equality of the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Revision(String);

impl Revision {
    /// Parse a revision from raw tool output
    ///
    /// Returns `None` for empty (or whitespace-only) input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Abbreviated form for display
    pub fn short(&self) -> &str {
        let end = self
            .0
            .char_indices()
            .nth(12)
            .map(|(i, _)| i)
            .unwrap_or(self.0.len());
        &self.0[..end]
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Revision {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Version of an artifact's source paths
///
/// Deliberately not `PartialEq`: a dirty tree must never compare equal to
/// anything, so comparisons go through [`SourceVersion::revision`].
#[derive(Debug, Clone)]
pub enum SourceVersion {
    /// All source paths are clean; the most recent commit touching them
    Committed(Revision),
    /// At least one source path has uncommitted changes
    Dirty,
    /// No source paths, or no commit ever touched them
    Untracked,
}

impl SourceVersion {
    /// The committed revision, if any
    pub fn revision(&self) -> Option<&Revision> {
        match self {
            Self::Committed(rev) => Some(rev),
            Self::Dirty | Self::Untracked => None,
        }
    }

    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }

    pub fn is_dirty(&self) -> bool {
        matches!(self, Self::Dirty)
    }

    /// True when this is a committed revision equal to `embedded`
    pub fn matches(&self, embedded: Option<&Revision>) -> bool {
        match (self.revision(), embedded) {
            (Some(ours), Some(theirs)) => ours == theirs,
            _ => false,
        }
    }
}

impl fmt::Display for SourceVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Committed(rev) => write!(f, "{}", rev),
            Self::Dirty => write!(f, "dirty"),
            Self::Untracked => write!(f, "untracked"),
        }
    }
}
