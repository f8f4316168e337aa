//! Service Command Value Object

use std::fmt;

/// Lifecycle command understood by the remote service launcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceCommand {
    /// Probe: exits zero if the service is running
    Running,
    Detach,
    Stop,
    Start,
}

impl ServiceCommand {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Detach => "detach",
            Self::Stop => "stop",
            Self::Start => "start",
        }
    }

    /// Probes report a status; a failing probe is not an error
    pub fn is_probe(self) -> bool {
        self == Self::Running
    }
}

impl fmt::Display for ServiceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
