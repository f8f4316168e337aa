//! Deploy Module
//!
//! Orchestrates the build / deploy / restart flow.
//!
//! ## Structure
//!
//! - `decision` - Pure build and deploy decisions
//! - `options` - Run configuration (`DeployOptions`)
//! - `result` - Result types (`DeployReport`, `ArtifactStatus`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use pk3deploy::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(GitCli::new(), SshTransport::from_env());
//! let report = use_case.execute(&DeployOptions::new(root, build_dir), &artifacts, &profile)?;
//! ```

mod decision;
mod options;
mod result;
mod use_case;

pub use decision::{build_decision, deploy_decision, Decision};
pub use options::DeployOptions;
pub use result::{ArtifactStatus, DeployReport};
pub use use_case::DeployUseCase;
