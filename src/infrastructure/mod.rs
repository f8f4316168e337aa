//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `archive` - pk3 (zip) writer and version marker reader
//! - `events/` - Event sinks (console)
//! - `lock` - Build directory run lock
//! - `transport/` - scp/ssh transport
//! - `vcs/` - git version control

pub mod archive;
pub mod events;
pub mod lock;
pub mod transport;
pub mod vcs;

// Re-export for convenience
pub use archive::{read_embedded_version, ArchiveBuilder, VERSION_MEMBER};
pub use events::ConsoleEventSink;
pub use lock::RunLock;
pub use transport::SshTransport;
pub use vcs::GitCli;
