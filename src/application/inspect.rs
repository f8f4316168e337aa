//! Remote Inspector
//!
//! Reads the version marker of an archive already deployed on the server.
//! The archive is copied into a private scratch file first; the scratch
//! file is removed on every path out of [`RemoteInspector::remote_version`].

use crate::domain::entities::Profile;
use crate::domain::ports::RemoteTransport;
use crate::domain::value_objects::{RemoteLayout, Revision};
use crate::infrastructure::archive::read_embedded_version;

use super::remote::scratch_file;

pub struct RemoteInspector<'a, T: RemoteTransport> {
    transport: &'a T,
    host: &'a str,
    layout: RemoteLayout,
}

impl<'a, T: RemoteTransport> RemoteInspector<'a, T> {
    pub fn new(transport: &'a T, profile: &'a Profile) -> Self {
        Self {
            transport,
            host: &profile.host,
            layout: profile.layout(),
        }
    }

    /// Version embedded in the deployed copy of `name`
    ///
    /// Never fails: a missing remote archive, a failed copy, or an archive
    /// without a marker all read as `None`.
    pub fn remote_version(&self, name: &str) -> Option<Revision> {
        let scratch = match scratch_file() {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!(error = %e, "cannot create scratch file; treating remote version as absent");
                return None;
            }
        };

        let remote_path = self.layout.pk3_file(name);
        match self.transport.fetch(self.host, &remote_path, scratch.path()) {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!(%remote_path, "no remote archive");
                return None;
            }
            Err(e) => {
                tracing::warn!(%remote_path, error = %e, "remote fetch failed");
                return None;
            }
        }

        let version = read_embedded_version(scratch.path());
        tracing::debug!(%remote_path, version = ?version.as_ref().map(Revision::short), "remote version");
        version
    }
}
