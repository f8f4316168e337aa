//! Configuration loading

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use toml::Value;

use crate::domain::entities::{ArtifactSpec, Profile};
use crate::domain::value_objects::{BuildMode, ConfigWarning};
use crate::error::{Pk3Error, Pk3Result};

use super::profile::ProfileScopes;
use super::suggest::suggest;
use super::template::{TemplateError, Variables};
use super::types::{
    ArtifactSection, ProfileSection, ANY_PROFILE, ARTIFACT_KEYS, ARTIFACT_SUFFIX, PROFILE_KEYS,
    PROFILE_SECTIONS,
};

/// Config file looked up in the repository root
pub const DEFAULT_CONFIG_FILE: &str = "deploy.toml";

/// Parsed deploy configuration
#[derive(Debug, Clone, Default)]
pub struct DeployConfig {
    /// Artifacts in declaration order
    pub artifacts: Vec<ArtifactSpec>,
    profiles: BTreeMap<String, ProfileSection>,
}

impl DeployConfig {
    /// Load a config file, discarding warnings
    pub fn load(path: &Path, vars: &Variables) -> Pk3Result<Self> {
        load_with_warnings(path, vars).map(|(config, _)| config)
    }

    /// Profile tables consulted for `mode`, in lookup order
    pub fn scopes(&self, mode: BuildMode) -> ProfileScopes<'_> {
        ProfileScopes::new()
            .with_scope(ANY_PROFILE, self.profiles.get(ANY_PROFILE))
            .with_scope(mode.profile_section(), self.profiles.get(mode.profile_section()))
    }

    /// Deployment target for `mode`
    pub fn profile(&self, mode: BuildMode) -> Pk3Result<Profile> {
        self.scopes(mode).profile()
    }
}

/// Load configuration and collect non-fatal warnings (unknown tables/keys)
pub fn load_with_warnings(
    path: &Path,
    vars: &Variables,
) -> Pk3Result<(DeployConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| invalid(path, e.to_string()))?;
    parse_with_warnings(&content, path, vars)
}

/// Parse configuration text; `file` is only used in messages
pub fn parse_with_warnings(
    content: &str,
    file: &Path,
    vars: &Variables,
) -> Pk3Result<(DeployConfig, Vec<ConfigWarning>)> {
    let table: toml::Table = toml::from_str(content).map_err(|e| invalid(file, e.to_string()))?;

    let mut config = DeployConfig::default();
    let mut unknown: Vec<(String, &'static [&'static str])> = Vec::new();

    for (name, value) in table {
        if name.ends_with(ARTIFACT_SUFFIX) {
            check_artifact_name(&name, file)?;
            let value = interpolate_value(value, vars, file)?;
            let section: ArtifactSection =
                deserialize_section(&name, value, file, ARTIFACT_KEYS, &mut unknown)?;
            config.artifacts.push(artifact_spec(&name, section)?);
        } else if PROFILE_SECTIONS.contains(&name.as_str()) {
            let value = interpolate_value(value, vars, file)?;
            let section: ProfileSection =
                deserialize_section(&name, value, file, PROFILE_KEYS, &mut unknown)?;
            config.profiles.insert(name, section);
        } else if let Some(dotted) = unquoted_artifact(&name, &value) {
            return Err(invalid(
                file,
                format!(
                    "[{}] is read as nested tables; quote the archive name: [\"{}\"]",
                    dotted, dotted
                ),
            ));
        } else {
            unknown.push((name, PROFILE_SECTIONS));
        }
    }

    let warnings = unknown
        .into_iter()
        .map(|(key, candidates)| {
            let last = key.rsplit('.').next().unwrap_or(key.as_str()).to_string();
            ConfigWarning {
                line: find_line_number(content, &last),
                suggestion: suggest(&last, candidates).map(str::to_string),
                file: file.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Dotted name of a table path ending in `pk3`, as produced by an unquoted
/// `[data.pk3]` header
fn unquoted_artifact(name: &str, value: &Value) -> Option<String> {
    let table = value.as_table()?;
    table.iter().find_map(|(key, nested)| {
        if !nested.is_table() {
            return None;
        }
        let dotted = format!("{}.{}", name, key);
        if key == ARTIFACT_SUFFIX.trim_start_matches('.') {
            Some(dotted)
        } else {
            unquoted_artifact(&dotted, nested)
        }
    })
}

fn deserialize_section<T: DeserializeOwned>(
    name: &str,
    value: Value,
    file: &Path,
    candidates: &'static [&'static str],
    unknown: &mut Vec<(String, &'static [&'static str])>,
) -> Pk3Result<T> {
    if !value.is_table() {
        return Err(invalid(file, format!("'{}' must be a table", name)));
    }
    serde_ignored::deserialize(value, |path| {
        unknown.push((format!("{}.{}", name, path), candidates));
    })
    .map_err(|e| invalid(file, format!("[\"{}\"]: {}", name, e)))
}

fn artifact_spec(name: &str, section: ArtifactSection) -> Pk3Result<ArtifactSpec> {
    let files = section.files.entries();
    if files.is_empty() {
        return Err(Pk3Error::EmptyManifest {
            artifact: name.to_string(),
        });
    }

    let mut spec = ArtifactSpec::new(name, files).with_root(section.root.unwrap_or_default());
    if let Some(src) = section.src {
        spec = spec.with_source_paths(src.entries().into_iter().map(PathBuf::from).collect());
    }
    Ok(spec)
}

/// Artifact names become file names under `<B>/base` and on the server
fn check_artifact_name(name: &str, file: &Path) -> Pk3Result<()> {
    let plain = Path::new(name)
        .file_name()
        .map(|n| n == name)
        .unwrap_or(false);
    if plain && name.len() > ARTIFACT_SUFFIX.len() {
        Ok(())
    } else {
        Err(invalid(file, format!("invalid artifact name '{}'", name)))
    }
}

fn interpolate_value(value: Value, vars: &Variables, file: &Path) -> Pk3Result<Value> {
    Ok(match value {
        Value::String(s) => Value::String(interpolate_str(&s, vars, file)?),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|v| interpolate_value(v, vars, file))
                .collect::<Pk3Result<_>>()?,
        ),
        Value::Table(table) => Value::Table(
            table
                .into_iter()
                .map(|(k, v)| Ok((k, interpolate_value(v, vars, file)?)))
                .collect::<Pk3Result<_>>()?,
        ),
        other => other,
    })
}

fn interpolate_str(s: &str, vars: &Variables, file: &Path) -> Pk3Result<String> {
    vars.interpolate(s).map_err(|e| match e {
        TemplateError::Unknown(name) => Pk3Error::UnknownVariable {
            name,
            value: s.to_string(),
        },
        TemplateError::Unterminated => invalid(file, format!("{} in '{}'", e, s)),
    })
}

fn invalid(file: &Path, message: String) -> Pk3Error {
    Pk3Error::InvalidConfig {
        file: file.to_path_buf(),
        message,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}
