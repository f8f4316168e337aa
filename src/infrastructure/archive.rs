//! pk3 Archive Builder
//!
//! Writes deflate-compressed zip archives from an artifact manifest and
//! reads back the embedded version marker.
//!
//! Release archives built from a committed revision carry one extra member,
//! [`VERSION_MEMBER`], holding the raw revision identifier. Debug archives
//! and archives built from a dirty or untracked tree never carry it, so they
//! never look up to date.

use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::domain::entities::ArtifactSpec;
use crate::domain::value_objects::{BuildMode, Revision, SourceVersion};
use crate::error::{Pk3Error, Pk3Result};

/// Reserved archive member holding the version marker
pub const VERSION_MEMBER: &str = "pk3_version";

/// Highest deflate level (zlib `Z_BEST_COMPRESSION`)
const MAX_DEFLATE_LEVEL: i64 = 9;

/// Builds pk3 archives relative to a repository root
#[derive(Debug, Clone)]
pub struct ArchiveBuilder {
    repo_root: PathBuf,
    mode: BuildMode,
}

impl ArchiveBuilder {
    pub fn new(repo_root: impl Into<PathBuf>, mode: BuildMode) -> Self {
        Self {
            repo_root: repo_root.into(),
            mode,
        }
    }

    /// Build `spec` into `target`
    ///
    /// Every manifest entry is checked before anything is written; a missing
    /// entry fails with the artifact name and the `root`-joined path. The
    /// archive is assembled in a temporary file next to `target` and only
    /// renamed into place once complete.
    pub fn build(&self, spec: &ArtifactSpec, version: &SourceVersion, target: &Path) -> Pk3Result<()> {
        let base = self.repo_root.join(spec.root());

        let mut members = Vec::with_capacity(spec.files().len());
        for file in spec.files() {
            if !base.join(file).exists() {
                return Err(Pk3Error::MissingFile {
                    artifact: spec.name().to_string(),
                    path: spec.file_path(file),
                });
            }
            let name = member_name(file).ok_or_else(|| Pk3Error::InvalidConfig {
                file: spec.file_path(file),
                message: format!(
                    "{}: archive member must stay inside the archive root",
                    spec.name()
                ),
            })?;
            members.push((base.join(file), name));
        }

        let dir = target
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;

        let archive_err = |message: String| Pk3Error::Archive {
            artifact: spec.name().to_string(),
            path: target.to_path_buf(),
            message,
        };

        let staging = NamedTempFile::new_in(dir)?;
        let mut zip = ZipWriter::new(staging.as_file());
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(MAX_DEFLATE_LEVEL));

        for (source, name) in members {
            if source.is_dir() {
                zip.add_directory(name, options)
                    .map_err(|e| archive_err(e.to_string()))?;
                continue;
            }

            zip.start_file(name, file_options(options, &source))
                .map_err(|e| archive_err(e.to_string()))?;
            let mut input = File::open(&source)?;
            io::copy(&mut input, &mut zip)?;
        }

        if let Some(revision) = self.stamp(version) {
            zip.start_file(VERSION_MEMBER, options)
                .map_err(|e| archive_err(e.to_string()))?;
            io::Write::write_all(&mut zip, revision.as_bytes())?;
        }

        zip.finish().map_err(|e| archive_err(e.to_string()))?;
        set_readable(staging.as_file())?;
        staging
            .persist(target)
            .map_err(|e| archive_err(e.error.to_string()))?;

        tracing::debug!(
            artifact = spec.name(),
            target = %target.display(),
            stamped = self.stamp(version).is_some(),
            "archive written"
        );
        Ok(())
    }

    /// Revision to embed, if this build gets a version marker
    fn stamp<'a>(&self, version: &'a SourceVersion) -> Option<&'a Revision> {
        if self.mode.is_debug() {
            return None;
        }
        version.revision()
    }
}

/// Normalized archive member name: `/` separators, no leading `/`, no
/// empty or `.` segments
///
/// `None` when the entry climbs out of the root with `..` or names nothing.
fn member_name(file: &str) -> Option<String> {
    let normalized = file.replace('\\', "/");
    let mut segments = Vec::new();
    for segment in normalized.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return None,
            other => segments.push(other),
        }
    }
    if segments.is_empty() {
        None
    } else {
        Some(segments.join("/"))
    }
}

/// Staging files are created owner-only; archives get the usual 0644
#[cfg(unix)]
fn set_readable(file: &File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_readable(_file: &File) -> io::Result<()> {
    Ok(())
}

#[cfg(unix)]
fn file_options(options: SimpleFileOptions, source: &Path) -> SimpleFileOptions {
    use std::os::unix::fs::PermissionsExt;
    match fs::metadata(source) {
        Ok(meta) => options.unix_permissions(meta.permissions().mode()),
        Err(_) => options,
    }
}

#[cfg(not(unix))]
fn file_options(options: SimpleFileOptions, _source: &Path) -> SimpleFileOptions {
    options
}

/// Read the version marker embedded in an archive
///
/// Any failure - missing file, corrupt archive, missing or unreadable
/// member - is an absent version, never an error.
pub fn read_embedded_version(path: &Path) -> Option<Revision> {
    let file = File::open(path).ok()?;
    let mut archive = ZipArchive::new(BufReader::new(file)).ok()?;
    let mut member = archive.by_name(VERSION_MEMBER).ok()?;
    let mut raw = String::new();
    member.read_to_string(&mut raw).ok()?;
    Revision::parse(&raw)
}
