//! Test environment builder for isolated pk3deploy testing.
//!
//! Provides `TestEnv` - a temporary git repository with a build directory,
//! plus helpers to run the pk3deploy binary against it.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;
use zip::ZipArchive;

/// Result of running a pk3deploy CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated repository with a release build directory.
pub struct TestEnv {
    /// Temporary git repository
    pub repo: TempDir,
    /// Value passed as `$B`
    pub build_dir: PathBuf,
    extra_env: Vec<(String, String)>,
    bin: PathBuf,
}

impl TestEnv {
    /// Fresh repository, or `None` when git is not installed
    pub fn git_repo() -> Option<Self> {
        Self::with_build_dir("build/release-x86_64")
    }

    /// Fresh repository whose build directory name selects debug mode
    pub fn debug_repo() -> Option<Self> {
        Self::with_build_dir("build/debug-x86_64")
    }

    fn with_build_dir(relative: &str) -> Option<Self> {
        let repo = tempfile::tempdir().expect("Failed to create temp dir");
        let env = Self {
            build_dir: repo.path().join(relative),
            repo,
            extra_env: Vec::new(),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_pk3deploy")),
        };

        if !env.try_git(&["init", "-q"]) {
            return None;
        }
        env.git(&["config", "user.name", "pk3deploy tests"]);
        env.git(&["config", "user.email", "tests@example.net"]);
        env.git(&["config", "commit.gpgsign", "false"]);
        env.write(".gitignore", "build/\n");
        Some(env)
    }

    /// Repository with the standard assets committed and `config` as deploy.toml
    pub fn with_assets(config: &str) -> Option<Self> {
        let env = Self::git_repo()?;
        env.write("deploy.toml", config);
        env.write("assets/a.cfg", super::ASSET_A);
        env.write("assets/maps/b.txt", super::ASSET_B);
        env.write("server.cfg", super::SERVER_CFG);
        env.commit("initial");
        Some(env)
    }

    /// Add an environment variable to every run
    pub fn set_env(&mut self, key: &str, value: impl Into<String>) {
        self.extra_env.push((key.to_string(), value.into()));
    }

    /// Get path relative to the repository root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.repo.path().join(relative)
    }

    /// Path of a built archive
    pub fn archive(&self, name: &str) -> PathBuf {
        self.build_dir.join("base").join(name)
    }

    /// Write a file into the repository
    pub fn write(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Stage everything and commit
    pub fn commit(&self, message: &str) {
        self.git(&["add", "-A"]);
        self.git(&["commit", "-q", "-m", message]);
    }

    /// Full hash of HEAD
    pub fn head(&self) -> String {
        let output = Command::new("git")
            .current_dir(self.repo.path())
            .args(["rev-parse", "HEAD"])
            .output()
            .expect("Failed to run git");
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    pub fn git(&self, args: &[&str]) {
        assert!(self.try_git(args), "git {:?} failed", args);
    }

    fn try_git(&self, args: &[&str]) -> bool {
        Command::new("git")
            .current_dir(self.repo.path())
            .args(args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Run pk3deploy from the repository root with the build variables set
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run pk3deploy with extra env vars (an empty value removes the variable)
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.repo.path())
            .args(args)
            .env("ARCH", "x86_64")
            .env("B", &self.build_dir)
            .env("SHLIBEXT", ".so")
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("PK3DEPLOY_SSH")
            .env_remove("PK3DEPLOY_SCP")
            .stdin(Stdio::null());

        for (key, value) in &self.extra_env {
            cmd.env(key, value);
        }
        for (key, value) in env_vars {
            if value.is_empty() {
                cmd.env_remove(key);
            } else {
                cmd.env(key, value);
            }
        }

        let output = cmd.output().expect("Failed to execute pk3deploy");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Member names of an archive, in order
pub fn archive_members(path: &Path) -> Vec<String> {
    let mut archive = ZipArchive::new(File::open(path).expect("archive exists"))
        .expect("archive is a valid zip");
    (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect()
}

/// Content of one archive member
pub fn archive_member(path: &Path, name: &str) -> Option<String> {
    use std::io::Read;

    let mut archive = ZipArchive::new(File::open(path).ok()?).ok()?;
    let mut member = archive.by_name(name).ok()?;
    let mut content = String::new();
    member.read_to_string(&mut content).ok()?;
    Some(content)
}
