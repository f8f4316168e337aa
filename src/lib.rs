//! pk3deploy - build and deploy versioned pk3 archives
//!
//! Packages game assets into deflate-compressed pk3 (zip) archives stamped
//! with the git revision of their sources, pushes stale archives to a game
//! server over `scp`/`ssh`, syncs loose server files and restarts the game
//! service when anything changed.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployOptions, DeployReport, DeployUseCase};
pub use config::{BuildEnvironment, DeployConfig, EnvOverrides};
pub use domain::entities::{ArtifactSpec, Profile};
pub use domain::value_objects::{BuildMode, Revision, SourceVersion};
pub use error::{Pk3Error, Pk3Result};
