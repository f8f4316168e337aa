//! Profile entity - the deployment target

use std::path::PathBuf;

use crate::domain::value_objects::RemoteLayout;

/// Resolved deployment target parameters for the current build mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub host: String,
    pub game: String,
    pub fs_game: String,
    /// Loose files synced by content, relative to the repository root
    pub extra_files: Vec<PathBuf>,
}

impl Profile {
    pub fn new(
        host: impl Into<String>,
        game: impl Into<String>,
        fs_game: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            game: game.into(),
            fs_game: fs_game.into(),
            extra_files: Vec::new(),
        }
    }

    pub fn with_extra_files(mut self, extra_files: Vec<PathBuf>) -> Self {
        self.extra_files = extra_files;
        self
    }

    pub fn layout(&self) -> RemoteLayout {
        RemoteLayout::new(&self.game, &self.fs_game)
    }
}
