//! Error types for pk3deploy
//!
//! Uses `thiserror` for library errors. Every variant here is fatal: benign
//! absences (no history, missing remote archive, missing metadata) are
//! modelled as values, never as errors.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{TransportError, VcsError};

/// Result type alias for pk3deploy operations
pub type Pk3Result<T> = Result<T, Pk3Error>;

/// Main error type for pk3deploy operations
#[derive(Error, Debug)]
pub enum Pk3Error {
    /// Required environment input is not set
    #[error("missing required environment variable '{var}' (or pass {flag})")]
    MissingEnv { var: &'static str, flag: &'static str },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// A required profile option is missing from every lookup scope
    #[error("missing option '{option}' (looked in: {scopes})")]
    MissingOption { option: String, scopes: String },

    /// Template variable referenced in a config value is not defined
    #[error("unknown variable '${{{name}}}' in '{value}'")]
    UnknownVariable { name: String, value: String },

    /// Artifact declares no files
    #[error("{artifact}: no files declared")]
    EmptyManifest { artifact: String },

    /// Declared file does not exist at build time
    #[error("{artifact}: file not found: {path}")]
    MissingFile { artifact: String, path: PathBuf },

    /// Extra file listed in the profile does not exist locally
    #[error("extra file not found: {path}")]
    MissingExtraFile { path: PathBuf },

    /// Archive could not be written
    #[error("{artifact}: failed to write archive {path}: {message}")]
    Archive {
        artifact: String,
        path: PathBuf,
        message: String,
    },

    /// Remote command exited with a failure status
    #[error("remote command failed on {host} (exit code {code:?}): {command}{}", stderr_suffix(.stderr))]
    RemoteCommand {
        host: String,
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// Another run holds the build directory lock
    #[error("another pk3deploy run is in progress (lock held on {path})")]
    Locked { path: PathBuf },

    /// Version control query failed
    #[error(transparent)]
    Vcs(#[from] VcsError),

    /// Transport (scp/ssh) failed
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!("\n{}", stderr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_remote_command() {
        let err = Pk3Error::RemoteCommand {
            host: "game.example.net".to_string(),
            command: "bin/tremded 'gpp' start".to_string(),
            code: Some(1),
            stderr: String::new(),
        };
        assert_eq!(
            err.to_string(),
            "remote command failed on game.example.net (exit code Some(1)): bin/tremded 'gpp' start"
        );
    }

    #[test]
    fn test_error_display_missing_file() {
        let err = Pk3Error::MissingFile {
            artifact: "data-1.1.pk3".to_string(),
            path: PathBuf::from("assets/maps/arena.bsp"),
        };
        assert_eq!(
            err.to_string(),
            "data-1.1.pk3: file not found: assets/maps/arena.bsp"
        );
    }

    #[test]
    fn test_error_display_unknown_variable() {
        let err = Pk3Error::UnknownVariable {
            name: "ARCHH".to_string(),
            value: "vms-${ARCHH}.pk3".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown variable '${ARCHH}' in 'vms-${ARCHH}.pk3'"
        );
    }

    #[test]
    fn test_error_display_missing_env() {
        let err = Pk3Error::MissingEnv {
            var: "B",
            flag: "--build-dir",
        };
        assert_eq!(
            err.to_string(),
            "missing required environment variable 'B' (or pass --build-dir)"
        );
    }
}
