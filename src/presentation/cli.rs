//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--config, --root, env overrides, --color, --verbose) are
//!   inherited by all subcommands
//! - Running without a subcommand is the same as `deploy`

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::EnvOverrides;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// pk3deploy - build versioned pk3 archives and deploy them over SSH
#[derive(Parser, Debug)]
#[command(name = "pk3deploy")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'pk3deploy' without a command to build, deploy and restart.")]
pub struct Cli {
    /// Config file (defaults to deploy.toml in the repository root)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Repository root (defaults to the nearest directory with deploy.toml or .git)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Target architecture (overrides $ARCH)
    #[arg(long, global = true, value_name = "ARCH")]
    pub arch: Option<String>,

    /// Build output directory (overrides $B)
    #[arg(long, global = true, value_name = "DIR")]
    pub build_dir: Option<PathBuf>,

    /// Shared library extension (overrides $SHLIBEXT)
    #[arg(long, global = true, value_name = "EXT")]
    pub shlib_ext: Option<String>,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn env_overrides(&self) -> EnvOverrides {
        EnvOverrides {
            arch: self.arch.clone(),
            build_dir: self.build_dir.clone(),
            shlib_ext: self.shlib_ext.clone(),
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Build, deploy, sync extra files and restart the server if anything changed
    Deploy,

    /// Build pk3 archives only (no network access)
    Build,

    /// Show source, local and deployed versions of every archive
    Status {
        /// Also read the versions deployed on the server
        #[arg(long)]
        remote: bool,
    },

    /// Restart the remote game server unconditionally
    Restart,
}
