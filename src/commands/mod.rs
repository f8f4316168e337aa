//! Command handlers
//!
//! Every command resolves the same session first: repository root, build
//! environment, configuration and terminal settings.

mod build;
mod deploy;
mod project_root;
mod restart;
mod status;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::style::Stylize;

use pk3deploy::config::{load_with_warnings, BuildEnvironment, DeployConfig, DEFAULT_CONFIG_FILE};
use pk3deploy::domain::ports::DeployEventSink;
use pk3deploy::infrastructure::{ConsoleEventSink, RunLock};
use pk3deploy::presentation::Cli;
use pk3deploy::DeployOptions;

use crate::ui::context::UiContext;

pub use build::cmd_build;
pub use deploy::cmd_deploy;
pub use restart::cmd_restart;
pub use status::cmd_status;

/// Resolved inputs shared by all commands
pub struct Session {
    pub env: BuildEnvironment,
    pub config: DeployConfig,
    pub options: DeployOptions,
    pub ui: UiContext,
}

impl Session {
    pub fn open(cli: &Cli) -> Result<Self> {
        let ui = UiContext::new(cli.verbose, cli.color);
        let cwd = std::env::current_dir().context("cannot determine current directory")?;

        let repo_root = match &cli.root {
            Some(root) => absolute(&cwd, root),
            None => project_root::discover_repo_root(&cwd),
        };
        tracing::debug!(repo_root = %repo_root.display(), "repository root");

        let env = BuildEnvironment::from_process(&cli.env_overrides(), &repo_root)?;
        let config_path = match &cli.config {
            Some(path) => absolute(&cwd, path),
            None => repo_root.join(DEFAULT_CONFIG_FILE),
        };

        let (config, warnings) = load_with_warnings(&config_path, &env.variables())?;
        for warning in &warnings {
            let label = if ui.color {
                "warning:".yellow().to_string()
            } else {
                "warning:".to_string()
            };
            eprintln!("{} {}", label, warning);
        }

        let options = DeployOptions::new(&repo_root, &env.build_dir);
        tracing::debug!(
            build_dir = %env.build_dir.display(),
            mode = %options.mode,
            artifacts = config.artifacts.len(),
            "session ready"
        );

        Ok(Self {
            env,
            config,
            options,
            ui,
        })
    }

    /// Console progress sink
    pub fn events(&self) -> Arc<dyn DeployEventSink> {
        Arc::new(ConsoleEventSink::stderr(self.ui.color))
    }

    /// Exclusive lock on the build directory for the rest of the run
    pub fn lock(&self) -> Result<RunLock> {
        Ok(RunLock::acquire(&self.env.build_dir)?)
    }
}

fn absolute(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
