//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::DeployUseCase;
use crate::infrastructure::{GitCli, SshTransport};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase = DeployUseCase<GitCli, SshTransport>;

/// Create a deploy use case backed by `git`, `scp` and `ssh`
///
/// The transport programs can be swapped through `PK3DEPLOY_SSH` and
/// `PK3DEPLOY_SCP`.
pub fn create_deploy_use_case() -> ConcreteDeployUseCase {
    DeployUseCase::new(GitCli::new(), SshTransport::from_env())
}
