//! Deploy Result

use crate::domain::ports::SkipReason;
use crate::domain::value_objects::{Revision, SourceVersion};

/// Result of a deploy run
#[derive(Debug, Clone, Default)]
pub struct DeployReport {
    /// Archives written locally
    pub built: Vec<String>,
    /// Archives pushed to the server
    pub deployed: Vec<String>,
    /// Extra files uploaded
    pub extras_deployed: Vec<String>,
    /// Items skipped, with the reason
    pub skipped: Vec<(String, SkipReason)>,
    /// Whether the restart sequence ran
    pub restarted: bool,
}

impl DeployReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether anything landed on the server
    pub fn has_changes(&self) -> bool {
        !self.deployed.is_empty() || !self.extras_deployed.is_empty()
    }

    pub fn skip_reason(&self, name: &str) -> Option<SkipReason> {
        self.skipped
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, reason)| *reason)
    }
}

/// Version overview for one artifact
#[derive(Debug, Clone)]
pub struct ArtifactStatus {
    pub name: String,
    /// Version of the source paths
    pub source: SourceVersion,
    /// Version stamped in the local archive
    pub local: Option<Revision>,
    /// Version stamped in the deployed archive, when the server was queried
    pub remote: Option<Option<Revision>>,
}

impl ArtifactStatus {
    pub fn local_up_to_date(&self) -> bool {
        self.source.matches(self.local.as_ref())
    }

    pub fn remote_up_to_date(&self) -> Option<bool> {
        self.remote
            .as_ref()
            .map(|remote| self.source.matches(remote.as_ref()))
    }
}
