//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod build_mode;
mod config_warning;
mod remote_layout;
mod revision;
mod service_command;

pub use build_mode::BuildMode;
pub use config_warning::ConfigWarning;
pub use remote_layout::{shell_quote, RemoteLayout};
pub use revision::{Revision, SourceVersion};
pub use service_command::ServiceCommand;
