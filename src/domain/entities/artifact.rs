//! Artifact entity - a declared build unit

use std::path::{Path, PathBuf};

/// A named archive built from an ordered file manifest
///
/// `files` are relative to `root`; `root` is relative to the repository
/// root. The version of the artifact is derived from the history of its
/// source paths, which default to the `root`-joined files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSpec {
    name: String,
    root: PathBuf,
    files: Vec<String>,
    sources: Option<Vec<PathBuf>>,
}

impl ArtifactSpec {
    pub fn new(name: impl Into<String>, files: Vec<String>) -> Self {
        Self {
            name: name.into(),
            root: PathBuf::new(),
            files,
            sources: None,
        }
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Override the paths whose history determines the version
    pub fn with_source_paths(mut self, sources: Vec<PathBuf>) -> Self {
        self.sources = Some(sources);
        self
    }

    /// Archive file name, also the identifier
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Archive member names, in archive order
    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn has_explicit_sources(&self) -> bool {
        self.sources.is_some()
    }

    /// Paths (relative to the repository root) that version this artifact
    pub fn source_paths(&self) -> Vec<PathBuf> {
        match &self.sources {
            Some(sources) => sources.clone(),
            None => self.files.iter().map(|f| self.root.join(f)).collect(),
        }
    }

    /// Location of a manifest entry, relative to the repository root
    pub fn file_path(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }
}
