//! Configuration type definitions

use serde::Deserialize;

/// Table holding options shared by every build mode
pub const ANY_PROFILE: &str = "any-profile";

/// Every profile table name, in lookup order for the mode-specific ones
pub const PROFILE_SECTIONS: &[&str] = &[ANY_PROFILE, "debug-profile", "release-profile"];

/// Suffix that marks a table as an artifact declaration
pub const ARTIFACT_SUFFIX: &str = ".pk3";

/// A list of paths
///
/// Accepts both a TOML array and a newline-separated string:
///
/// ```toml
/// files = ["maps/arena.bsp", "scripts/arena.arena"]
///
/// files = """
///     maps/arena.bsp
///     scripts/arena.arena
/// """
/// ```
///
/// Entries are trimmed; blank lines are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PathList {
    List(Vec<String>),
    Lines(String),
}

impl PathList {
    pub fn entries(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            Self::List(items) => items.iter().map(String::as_str).collect(),
            Self::Lines(text) => text.lines().collect(),
        };
        raw.into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Default for PathList {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

/// `["<name>.pk3"]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ArtifactSection {
    /// Archive members, relative to `root`
    pub files: PathList,

    /// Base directory of `files`, relative to the repository root
    #[serde(default)]
    pub root: Option<String>,

    /// Paths whose history versions the archive (defaults to `files`)
    #[serde(default)]
    pub src: Option<PathList>,
}

/// `[any-profile]`, `[debug-profile]` or `[release-profile]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileSection {
    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub game: Option<String>,

    #[serde(default)]
    pub fs_game: Option<String>,

    #[serde(default)]
    pub extra_files: Option<PathList>,
}

impl ProfileSection {
    /// Value of a string option by its config key
    pub fn get(&self, option: &str) -> Option<&str> {
        match option {
            "host" => self.host.as_deref(),
            "game" => self.game.as_deref(),
            "fs_game" => self.fs_game.as_deref(),
            _ => None,
        }
    }
}

/// Keys accepted in artifact tables
pub(crate) const ARTIFACT_KEYS: &[&str] = &["files", "root", "src"];

/// Keys accepted in profile tables
pub(crate) const PROFILE_KEYS: &[&str] = &["host", "game", "fs_game", "extra_files"];
