//! Build Mode Value Object

use std::fmt;
use std::path::Path;

/// Whether the current build output directory is a debug or release build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    Debug,
    #[default]
    Release,
}

impl BuildMode {
    /// Build directory basenames with this prefix select debug mode
    pub const DEBUG_PREFIX: &'static str = "debug-";

    /// Derive the mode from the build output directory name
    pub fn from_build_dir(build_dir: &Path) -> Self {
        let is_debug = build_dir
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.starts_with(Self::DEBUG_PREFIX))
            .unwrap_or(false);
        if is_debug {
            Self::Debug
        } else {
            Self::Release
        }
    }

    pub fn is_debug(self) -> bool {
        self == Self::Debug
    }

    /// Name of the mode-specific profile section
    pub fn profile_section(self) -> &'static str {
        match self {
            Self::Debug => "debug-profile",
            Self::Release => "release-profile",
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "debug"),
            Self::Release => write!(f, "release"),
        }
    }
}
