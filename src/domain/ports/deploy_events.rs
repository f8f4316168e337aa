//! Deploy Event Port
//!
//! Provides an observable interface for deploy operations.
//! Enables progress reporting and testing of the decision loop.

use std::fmt;

use crate::domain::value_objects::ServiceCommand;

/// Orchestration phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Build,
    Deploy,
    Restart,
}

/// Why an artifact or extra file was left alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Source paths are dirty or were never committed
    UncommittedChanges,
    /// The existing archive (local or remote) carries the same version
    UpToDate,
    /// No releasable build exists for this artifact
    NotBuilt,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UncommittedChanges => write!(f, "uncommitted changes"),
            Self::UpToDate => write!(f, "already up to date"),
            Self::NotBuilt => write!(f, "not built"),
        }
    }
}

/// Event emitted during deploy operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// A phase started
    PhaseStarted(Phase),

    /// Artifact or extra file skipped
    Skipped { name: String, reason: SkipReason },

    /// Artifact archive is being built
    Building { name: String },

    /// Artifact archive is being pushed to the server
    Deploying { name: String },

    /// Extra file was uploaded
    ExtraDeployed { name: String },

    /// Service command sent
    ServiceCommand { command: ServiceCommand },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress lines on stderr
/// - NoopEventSink: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {
        // Do nothing
    }
}
