//! Extra File Sync
//!
//! Loose files (server configs, map rotations, ...) are not versioned
//! through history. They are compared byte for byte with the copy on the
//! server and uploaded only when they differ or are missing there.

use std::fs;
use std::path::Path;

use crate::domain::entities::Profile;
use crate::domain::ports::RemoteTransport;
use crate::domain::value_objects::RemoteLayout;
use crate::error::{Pk3Error, Pk3Result};

use super::remote::{chmod_command, exec_checked, scratch_file};

pub struct ExtraFileSync<'a, T: RemoteTransport> {
    transport: &'a T,
    host: &'a str,
    layout: RemoteLayout,
}

impl<'a, T: RemoteTransport> ExtraFileSync<'a, T> {
    pub fn new(transport: &'a T, profile: &'a Profile) -> Self {
        Self {
            transport,
            host: &profile.host,
            layout: profile.layout(),
        }
    }

    /// Sync one local file into the served directory, returning whether it
    /// was uploaded
    pub fn sync(&self, local: &Path) -> Pk3Result<bool> {
        let name = match local.file_name().and_then(|n| n.to_str()) {
            Some(name) if local.is_file() => name,
            _ => {
                return Err(Pk3Error::MissingExtraFile {
                    path: local.to_path_buf(),
                })
            }
        };
        let local_bytes = fs::read(local)?;
        let remote_path = self.layout.served_file(name);

        if self.remote_matches(&remote_path, &local_bytes) {
            return Ok(false);
        }

        self.transport
            .push(self.host, local, &self.layout.served_dir())?;
        exec_checked(self.transport, self.host, &chmod_command(&remote_path))?;
        Ok(true)
    }

    fn remote_matches(&self, remote_path: &str, local_bytes: &[u8]) -> bool {
        let scratch = match scratch_file() {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!(error = %e, "cannot create scratch file; uploading unconditionally");
                return false;
            }
        };

        match self.transport.fetch(self.host, remote_path, scratch.path()) {
            Ok(true) => fs::read(scratch.path())
                .map(|remote| remote == local_bytes)
                .unwrap_or(false),
            Ok(false) => false,
            Err(e) => {
                tracing::warn!(%remote_path, error = %e, "remote fetch failed");
                false
            }
        }
    }
}
