//! Configuration warning value object.

use std::fmt;
use std::path::PathBuf;

/// Non-fatal configuration warning surfaced to CLI users.
///
/// Raised for tables and keys the loader does not recognize; the rest of
/// the file is still used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted path of the unknown table or key (`release-profile.hots`)
    pub key: String,
    /// The file where the warning occurred
    pub file: PathBuf,
    /// The line number (1-indexed) if available
    pub line: Option<usize>,
    /// A suggested correction if available
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_line_and_suggestion() {
        let warning = ConfigWarning {
            key: "release-profile.hots".to_string(),
            file: PathBuf::from("deploy.toml"),
            line: Some(7),
            suggestion: Some("host".to_string()),
        };
        assert_eq!(
            warning.to_string(),
            "unknown config key 'release-profile.hots' in deploy.toml:7 (did you mean 'host'?)"
        );
    }

    #[test]
    fn display_without_extras() {
        let warning = ConfigWarning {
            key: "colour".to_string(),
            file: PathBuf::from("deploy.toml"),
            line: None,
            suggestion: None,
        };
        assert_eq!(warning.to_string(), "unknown config key 'colour' in deploy.toml");
    }
}
