//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod deploy_events;
pub mod transport;
pub mod version_control;

pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink, Phase, SkipReason};
pub use transport::{RemoteOutput, RemoteTransport, TransportError};
pub use version_control::{VcsError, VersionControl};
