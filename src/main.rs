//! pk3deploy CLI - build versioned pk3 archives and deploy them over SSH
//!
//! Usage: pk3deploy [OPTIONS] [COMMAND]
//!
//! Commands:
//!   deploy   Build, deploy, sync extra files, restart if changed (default)
//!   build    Build pk3 archives only
//!   status   Show source, local and deployed versions
//!   restart  Restart the remote game server

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pk3deploy::presentation::{Cli, Commands};

use commands::Session;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let session = Session::open(&cli)?;
    match cli.command.clone().unwrap_or(Commands::Deploy) {
        Commands::Deploy => commands::cmd_deploy(&session),
        Commands::Build => commands::cmd_build(&session),
        Commands::Status { remote } => commands::cmd_status(&session, remote),
        Commands::Restart => commands::cmd_restart(&session),
    }
}

/// `RUST_LOG` wins; otherwise `-v` enables debug and `-vv` trace output
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "pk3deploy=debug",
        _ => "pk3deploy=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
