//! Fake game server.
//!
//! `ssh` and `scp` are replaced (via `PK3DEPLOY_SSH` / `PK3DEPLOY_SCP`) by
//! shell scripts that map `host:path` onto a local directory and run remote
//! commands inside it. The service launcher `bin/tremded` records every
//! command it receives and tracks a running flag.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::TestEnv;

const FAKE_SCP: &str = r#"#!/bin/sh
[ "$1" = "-q" ] && shift
map() {
    case "$1" in
        *:*) printf '%s/%s' "$PK3DEPLOY_FAKE_REMOTE" "${1#*:}" ;;
        *) printf '%s' "$1" ;;
    esac
}
echo "scp $1 $2" >> "$PK3DEPLOY_FAKE_LOG"
src=$(map "$1")
dst=$(map "$2")
[ -f "$src" ] || exit 1
cp "$src" "$dst"
"#;

const FAKE_SSH: &str = r#"#!/bin/sh
echo "ssh $2" >> "$PK3DEPLOY_FAKE_LOG"
cd "$PK3DEPLOY_FAKE_REMOTE" || exit 255
exec sh -c "$2"
"#;

const FAKE_TREMDED: &str = r#"#!/bin/sh
echo "$2" >> .service
case "$2" in
    running) [ -f .running ] ;;
    start) touch .running ;;
    stop) rm -f .running ;;
    detach) true ;;
    *) exit 2 ;;
esac
"#;

/// Local directory standing in for the server's home directory
pub struct FakeServer {
    pub home: TempDir,
    tools: TempDir,
}

impl FakeServer {
    /// Server with the `gpp` game and `slacker` fs_game laid out
    pub fn new() -> Self {
        let home = tempfile::tempdir().expect("Failed to create temp dir");
        let tools = tempfile::tempdir().expect("Failed to create temp dir");

        for dir in ["tremded/pk3/gpp", "tremded/gpp/slacker", "bin"] {
            std::fs::create_dir_all(home.path().join(dir)).unwrap();
        }
        install_script(&home.path().join("bin/tremded"), FAKE_TREMDED);
        install_script(&tools.path().join("ssh"), FAKE_SSH);
        install_script(&tools.path().join("scp"), FAKE_SCP);

        Self { home, tools }
    }

    /// Point `env` at this server
    pub fn attach(&self, env: &mut TestEnv) {
        env.set_env("PK3DEPLOY_SSH", self.tools.path().join("ssh").display().to_string());
        env.set_env("PK3DEPLOY_SCP", self.tools.path().join("scp").display().to_string());
        env.set_env("PK3DEPLOY_FAKE_REMOTE", self.home.path().display().to_string());
        env.set_env("PK3DEPLOY_FAKE_LOG", self.log_path().display().to_string());
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.home.path().join(relative)
    }

    /// Transport log, one `scp <src> <dst>` or `ssh <command>` per line
    pub fn log(&self) -> Vec<String> {
        read_lines(&self.log_path())
    }

    /// Only the scp uploads: local source, server destination
    pub fn uploads(&self) -> Vec<String> {
        self.log()
            .into_iter()
            .filter(|l| l.starts_with("scp ") && !l.starts_with("scp game.example.net:"))
            .collect()
    }

    /// Commands received by the service launcher
    pub fn service_commands(&self) -> Vec<String> {
        read_lines(&self.path(".service"))
    }

    pub fn clear_logs(&self) {
        let _ = std::fs::remove_file(self.log_path());
        let _ = std::fs::remove_file(self.path(".service"));
    }

    pub fn set_running(&self, running: bool) {
        let flag = self.path(".running");
        if running {
            std::fs::write(flag, "").unwrap();
        } else {
            let _ = std::fs::remove_file(flag);
        }
    }

    fn log_path(&self) -> PathBuf {
        self.tools.path().join("transport.log")
    }
}

fn install_script(path: &Path, content: &str) {
    std::fs::write(path, content).unwrap();
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .map(|s| s.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
