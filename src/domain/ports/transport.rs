//! Remote Transport Port
//!
//! Abstracts copying files to and from the game server and running commands
//! on it. The production implementation shells out to `scp` and `ssh`; tests
//! use an in-memory host.

use std::path::Path;

/// Transport failure that prevents an operation from completing
#[derive(Debug, Clone)]
pub enum TransportError {
    /// The transport program could not be started
    Unavailable(String),
    /// A copy exited with a failure status
    CopyFailed(String),
    /// Local file system error
    IoError(String),
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "Transport unavailable: {}", msg),
            Self::CopyFailed(msg) => write!(f, "Copy failed: {}", msg),
            Self::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for TransportError {}

/// Exit status and captured output of a remote command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteOutput {
    /// Exit code (`None` if terminated by a signal)
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl RemoteOutput {
    pub fn success() -> Self {
        Self {
            code: Some(0),
            ..Self::default()
        }
    }

    pub fn failure(code: i32) -> Self {
        Self {
            code: Some(code),
            ..Self::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Trait for moving files to and from a remote host
///
/// Every call blocks until the underlying transfer or command completes.
pub trait RemoteTransport {
    /// Copy `remote_path` on `host` to the local file `local`
    ///
    /// Returns `Ok(false)` when the copy fails (typically because the remote
    /// file does not exist). `Err` is reserved for a broken transport.
    fn fetch(&self, host: &str, remote_path: &str, local: &Path) -> Result<bool, TransportError>;

    /// Copy the local file into `remote_dir` on `host`, keeping its name
    fn push(&self, host: &str, local: &Path, remote_dir: &str) -> Result<(), TransportError>;

    /// Run a shell command on `host` and capture its exit status and output
    fn exec(&self, host: &str, command: &str) -> Result<RemoteOutput, TransportError>;
}
