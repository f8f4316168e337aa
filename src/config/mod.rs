//! Configuration module for pk3deploy
//!
//! Inputs, highest priority first:
//! 1. CLI flags (`--arch`, `--build-dir`, `--shlib-ext`, `--config`)
//! 2. Environment variables (`ARCH`, `B`, `SHLIBEXT`)
//! 3. `deploy.toml` in the repository root
//!
//! ```ignore
//! let env = BuildEnvironment::from_process(&overrides, &repo_root)?;
//! let (config, warnings) = load_with_warnings(&repo_root.join(DEFAULT_CONFIG_FILE), &env.variables())?;
//! let profile = config.profile(env.mode())?;
//! ```

mod env;
mod loader;
mod profile;
mod suggest;
mod template;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use env::{BuildEnvironment, EnvOverrides, ARCH_VAR, BUILD_DIR_VAR, SHLIBEXT_VAR};
pub use loader::{load_with_warnings, parse_with_warnings, DeployConfig, DEFAULT_CONFIG_FILE};
pub use profile::ProfileScopes;
pub use suggest::{levenshtein, suggest};
pub use template::{TemplateError, Variables};
pub use types::{ArtifactSection, PathList, ProfileSection, ANY_PROFILE, ARTIFACT_SUFFIX};
