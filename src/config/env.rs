//! Build environment inputs
//!
//! `ARCH`, `B` and `SHLIBEXT` come from the process environment (set by the
//! surrounding build) unless overridden on the command line.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::BuildMode;
use crate::error::{Pk3Error, Pk3Result};

use super::template::Variables;

pub const ARCH_VAR: &str = "ARCH";
pub const BUILD_DIR_VAR: &str = "B";
pub const SHLIBEXT_VAR: &str = "SHLIBEXT";

/// Values given on the command line, taking precedence over the environment
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub arch: Option<String>,
    pub build_dir: Option<PathBuf>,
    pub shlib_ext: Option<String>,
}

/// Resolved build environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildEnvironment {
    pub arch: String,
    /// Absolute build output directory
    pub build_dir: PathBuf,
    pub shlib_ext: String,
}

impl BuildEnvironment {
    /// Resolve from overrides and the process environment
    pub fn from_process(overrides: &EnvOverrides, repo_root: &Path) -> Pk3Result<Self> {
        Self::resolve(overrides, repo_root, |name| std::env::var(name).ok())
    }

    /// Resolve from overrides and an arbitrary variable lookup
    ///
    /// Empty values count as unset. A relative build directory is taken
    /// relative to `repo_root`.
    pub fn resolve<F>(overrides: &EnvOverrides, repo_root: &Path, lookup: F) -> Pk3Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &'static str, flag: &'static str, given: Option<String>| {
            given
                .or_else(|| lookup(name))
                .filter(|v| !v.is_empty())
                .ok_or(Pk3Error::MissingEnv { var: name, flag })
        };

        let arch = var(ARCH_VAR, "--arch", overrides.arch.clone())?;
        let build_dir = var(
            BUILD_DIR_VAR,
            "--build-dir",
            overrides
                .build_dir
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned()),
        )?;
        let shlib_ext = var(SHLIBEXT_VAR, "--shlib-ext", overrides.shlib_ext.clone())?;

        let build_dir = PathBuf::from(build_dir);
        let build_dir = if build_dir.is_absolute() {
            build_dir
        } else {
            repo_root.join(build_dir)
        };

        Ok(Self {
            arch,
            build_dir,
            shlib_ext,
        })
    }

    pub fn mode(&self) -> BuildMode {
        BuildMode::from_build_dir(&self.build_dir)
    }

    /// Template variables for configuration values
    pub fn variables(&self) -> Variables {
        Variables::new()
            .with(ARCH_VAR, self.arch.as_str())
            .with(BUILD_DIR_VAR, self.build_dir.to_string_lossy())
            .with(SHLIBEXT_VAR, self.shlib_ext.as_str())
    }
}
