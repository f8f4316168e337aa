//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Text rendering of command results
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Status table and run summary
//!
//! ## Usage
//!
//! ```ignore
//! use pk3deploy::presentation::factory;
//!
//! let use_case = factory::create_deploy_use_case();
//! let report = use_case.execute(&options, &config.artifacts, &profile)?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::create_deploy_use_case;
