//! Common test utilities for pk3deploy CLI tests.
//!
//! This module provides:
//! - `TestEnv`: a temporary git repository plus build directory, with
//!   helpers to run the compiled binary in it
//! - `FakeServer`: `ssh`/`scp` stand-ins that operate on a local directory
//! - Fixtures: reusable config and asset content

#![allow(dead_code)]

pub mod env;
pub mod fixtures;
#[cfg(unix)]
pub mod server;

pub use env::*;
pub use fixtures::*;
#[cfg(unix)]
pub use server::*;
