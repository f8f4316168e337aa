//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Build, deploy, extra sync and restart
//!
//! ## Components
//!
//! - `VersionOracle` - Source version from repository history
//! - `RemoteInspector` - Version stamped in the deployed archive
//! - `ExtraFileSync` - Content-compared sync of loose files
//! - `ServiceControl` - Remote service lifecycle commands

pub mod deploy;
pub mod extra_sync;
pub mod inspect;
mod remote;
pub mod service;
pub mod version_oracle;

pub use deploy::{ArtifactStatus, DeployOptions, DeployReport, DeployUseCase};
pub use extra_sync::ExtraFileSync;
pub use inspect::RemoteInspector;
pub use service::ServiceControl;
pub use version_oracle::VersionOracle;
