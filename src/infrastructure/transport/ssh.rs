//! SCP/SSH Transport
//!
//! Implements the RemoteTransport port with the system `scp` and `ssh`
//! binaries. Authentication is whatever the user's ssh configuration
//! provides; stdin is inherited so password prompts still work.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::ports::{RemoteOutput, RemoteTransport, TransportError};

/// Environment variable overriding the ssh program
pub const SSH_PROGRAM_ENV: &str = "PK3DEPLOY_SSH";
/// Environment variable overriding the scp program
pub const SCP_PROGRAM_ENV: &str = "PK3DEPLOY_SCP";

/// Transport that shells out to `scp` and `ssh`
#[derive(Debug, Clone)]
pub struct SshTransport {
    ssh: OsString,
    scp: OsString,
}

impl SshTransport {
    pub fn new() -> Self {
        Self {
            ssh: OsString::from("ssh"),
            scp: OsString::from("scp"),
        }
    }

    /// Use the programs named by `PK3DEPLOY_SSH` / `PK3DEPLOY_SCP` when set
    pub fn from_env() -> Self {
        let mut transport = Self::new();
        if let Some(ssh) = std::env::var_os(SSH_PROGRAM_ENV).filter(|s| !s.is_empty()) {
            transport.ssh = ssh;
        }
        if let Some(scp) = std::env::var_os(SCP_PROGRAM_ENV).filter(|s| !s.is_empty()) {
            transport.scp = scp;
        }
        transport
    }

    pub fn with_programs(ssh: impl Into<OsString>, scp: impl Into<OsString>) -> Self {
        Self {
            ssh: ssh.into(),
            scp: scp.into(),
        }
    }

    fn remote_spec(host: &str, path: &str) -> String {
        format!("{}:{}", host, path)
    }

    fn unavailable(program: &OsString, err: std::io::Error) -> TransportError {
        TransportError::Unavailable(format!("{}: {}", program.to_string_lossy(), err))
    }
}

impl Default for SshTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteTransport for SshTransport {
    fn fetch(&self, host: &str, remote_path: &str, local: &Path) -> Result<bool, TransportError> {
        let source = Self::remote_spec(host, remote_path);
        tracing::debug!(%source, local = %local.display(), "scp fetch");

        let status = Command::new(&self.scp)
            .arg("-q")
            .arg(&source)
            .arg(local)
            .stdin(Stdio::inherit())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| Self::unavailable(&self.scp, e))?;

        if !status.success() {
            tracing::debug!(%source, code = ?status.code(), "scp fetch failed");
        }
        Ok(status.success())
    }

    fn push(&self, host: &str, local: &Path, remote_dir: &str) -> Result<(), TransportError> {
        let dest = Self::remote_spec(host, remote_dir);
        tracing::debug!(local = %local.display(), %dest, "scp push");

        let status = Command::new(&self.scp)
            .arg("-q")
            .arg(local)
            .arg(&dest)
            .stdin(Stdio::inherit())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Self::unavailable(&self.scp, e))?;

        if !status.success() {
            return Err(TransportError::CopyFailed(format!(
                "{} -> {} (exit code: {:?})",
                local.display(),
                dest,
                status.code()
            )));
        }

        Ok(())
    }

    fn exec(&self, host: &str, command: &str) -> Result<RemoteOutput, TransportError> {
        tracing::debug!(%host, %command, "ssh exec");

        let output = Command::new(&self.ssh)
            .arg(host)
            .arg(command)
            .stdin(Stdio::inherit())
            .output()
            .map_err(|e| Self::unavailable(&self.ssh, e))?;

        let result = RemoteOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };
        tracing::trace!(code = ?result.code, stdout = %result.stdout.trim_end(), "ssh exec finished");
        Ok(result)
    }
}
