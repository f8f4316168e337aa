//! Remote helpers shared by the deploy components

use tempfile::NamedTempFile;

use crate::domain::ports::{RemoteOutput, RemoteTransport};
use crate::domain::value_objects::{shell_quote, RemoteLayout};
use crate::error::{Pk3Error, Pk3Result};

/// Run a command that must succeed
pub(crate) fn exec_checked<T: RemoteTransport>(
    transport: &T,
    host: &str,
    command: &str,
) -> Pk3Result<RemoteOutput> {
    let output = transport.exec(host, command)?;
    if !output.is_success() {
        return Err(Pk3Error::RemoteCommand {
            host: host.to_string(),
            command: command.to_string(),
            code: output.code,
            stderr: output.stderr.trim().to_string(),
        });
    }
    Ok(output)
}

/// Scratch file for a fetched remote copy; deleted when dropped
pub(crate) fn scratch_file() -> std::io::Result<NamedTempFile> {
    tempfile::Builder::new().prefix("pk3deploy-").tempfile()
}

/// `chmod 660` for a remote path
pub(crate) fn chmod_command(remote_path: &str) -> String {
    format!("chmod 660 {}", shell_quote(remote_path))
}

/// Commands run after an archive lands: fix permissions, then link it into
/// the served directory
pub(crate) fn install_command(layout: &RemoteLayout, name: &str) -> String {
    format!(
        "{}; ln -fs {} {}",
        chmod_command(&layout.pk3_file(name)),
        shell_quote(&layout.link_target(name)),
        shell_quote(&layout.served_file(name))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_command_chmods_then_links() {
        let layout = RemoteLayout::new("gpp", "slacker");
        assert_eq!(
            install_command(&layout, "data.pk3"),
            "chmod 660 'tremded/pk3/gpp/data.pk3'; \
             ln -fs '../../pk3/gpp/data.pk3' 'tremded/gpp/slacker/data.pk3'"
        );
    }

    #[test]
    fn scratch_file_is_removed_on_drop() {
        let scratch = scratch_file().unwrap();
        let path = scratch.path().to_path_buf();
        assert!(path.exists());
        drop(scratch);
        assert!(!path.exists());
    }
}
