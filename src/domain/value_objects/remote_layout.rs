//! Remote Layout Value Object
//!
//! Encodes the directory convention on the game server:
//!
//! ```text
//! tremded/pk3/<game>/<name>            deployed archives
//! tremded/<game>/<fs_game>/<name>      served files (symlinks + extra files)
//! bin/tremded <game> <command>         service launcher
//! ```
//!
//! All paths are relative to the remote login directory.

/// Remote directory layout for one game / fs_game pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteLayout {
    game: String,
    fs_game: String,
}

impl RemoteLayout {
    pub const BASE: &'static str = "tremded";
    pub const SERVICE: &'static str = "bin/tremded";

    pub fn new(game: impl Into<String>, fs_game: impl Into<String>) -> Self {
        Self {
            game: game.into(),
            fs_game: fs_game.into(),
        }
    }

    pub fn game(&self) -> &str {
        &self.game
    }

    /// Directory holding deployed archives
    pub fn pk3_dir(&self) -> String {
        format!("{}/pk3/{}", Self::BASE, self.game)
    }

    /// Deployed archive path
    pub fn pk3_file(&self, name: &str) -> String {
        format!("{}/{}", self.pk3_dir(), name)
    }

    /// Directory the game server reads from
    pub fn served_dir(&self) -> String {
        format!("{}/{}/{}", Self::BASE, self.game, self.fs_game)
    }

    /// Served path for a file name
    pub fn served_file(&self, name: &str) -> String {
        format!("{}/{}", self.served_dir(), name)
    }

    /// Symlink target, relative to the served directory
    pub fn link_target(&self, name: &str) -> String {
        format!("../../pk3/{}/{}", self.game, name)
    }
}

/// Quote a string for safe use in a remote shell command
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}
