//! Remote Transport Implementations

mod ssh;

pub use ssh::{SshTransport, SCP_PROGRAM_ENV, SSH_PROGRAM_ENV};
