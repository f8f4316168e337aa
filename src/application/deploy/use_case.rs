//! Deploy Use Case
//!
//! Orchestrates a run:
//! 1. Build pass: compute each artifact's source version and rebuild the
//!    archives that need it
//! 2. Deploy pass: push archives whose remote copy is stale
//! 3. Sync extra files
//! 4. Restart the game service if anything landed on the server
//!
//! The build pass finishes for every artifact before the first network
//! call, so a fatal build error never leaves the server half-updated.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::extra_sync::ExtraFileSync;
use crate::application::inspect::RemoteInspector;
use crate::application::remote::{exec_checked, install_command};
use crate::application::service::ServiceControl;
use crate::application::version_oracle::VersionOracle;
use crate::domain::entities::{ArtifactSpec, Profile};
use crate::domain::ports::{
    DeployEvent, DeployEventSink, NoopEventSink, Phase, RemoteTransport, SkipReason,
    VersionControl,
};
use crate::domain::value_objects::SourceVersion;
use crate::error::Pk3Result;
use crate::infrastructure::archive::{read_embedded_version, ArchiveBuilder};

use super::decision::{build_decision, deploy_decision, Decision};
use super::options::DeployOptions;
use super::result::{ArtifactStatus, DeployReport};

/// An artifact with its version computed for this run
struct PlannedArtifact<'a> {
    spec: &'a ArtifactSpec,
    version: SourceVersion,
    archive: PathBuf,
}

/// Deploy use case - orchestrates build, deploy, extra sync and restart
///
/// Parameterized by its ports so tests can script version control and run
/// against an in-memory server.
pub struct DeployUseCase<V, T>
where
    V: VersionControl,
    T: RemoteTransport,
{
    vcs: V,
    transport: T,
}

impl<V, T> DeployUseCase<V, T>
where
    V: VersionControl,
    T: RemoteTransport,
{
    pub fn new(vcs: V, transport: T) -> Self {
        Self { vcs, transport }
    }

    /// Run the full pipeline
    pub fn execute(
        &self,
        options: &DeployOptions,
        artifacts: &[ArtifactSpec],
        profile: &Profile,
    ) -> Pk3Result<DeployReport> {
        self.execute_with_events(options, artifacts, profile, Arc::new(NoopEventSink))
    }

    /// Run the full pipeline, reporting progress to `events`
    pub fn execute_with_events(
        &self,
        options: &DeployOptions,
        artifacts: &[ArtifactSpec],
        profile: &Profile,
        events: Arc<dyn DeployEventSink>,
    ) -> Pk3Result<DeployReport> {
        let mut report = DeployReport::new();
        let planned = self.build_pass(options, artifacts, events.as_ref(), &mut report)?;
        self.deploy_pass(options, &planned, profile, events.as_ref(), &mut report)?;
        self.sync_extras(options, profile, events.as_ref(), &mut report)?;

        if report.has_changes() {
            events.on_event(DeployEvent::PhaseStarted(Phase::Restart));
            ServiceControl::new(&self.transport, profile, events.as_ref()).restart()?;
            report.restarted = true;
        } else {
            tracing::debug!("nothing deployed; service left alone");
        }

        Ok(report)
    }

    /// Build pass only; never touches the network
    pub fn build(
        &self,
        options: &DeployOptions,
        artifacts: &[ArtifactSpec],
        events: Arc<dyn DeployEventSink>,
    ) -> Pk3Result<DeployReport> {
        let mut report = DeployReport::new();
        self.build_pass(options, artifacts, events.as_ref(), &mut report)?;
        Ok(report)
    }

    /// Versions of every artifact: source, local archive and, when a
    /// profile is given, the deployed archive
    pub fn status(
        &self,
        options: &DeployOptions,
        artifacts: &[ArtifactSpec],
        profile: Option<&Profile>,
    ) -> Pk3Result<Vec<ArtifactStatus>> {
        let oracle = VersionOracle::new(&self.vcs, &options.repo_root);
        let inspector = profile.map(|p| RemoteInspector::new(&self.transport, p));

        let mut statuses = Vec::with_capacity(artifacts.len());
        for spec in artifacts {
            statuses.push(ArtifactStatus {
                name: spec.name().to_string(),
                source: oracle.compute(&spec.source_paths())?,
                local: read_embedded_version(&options.archive_path(spec.name())),
                remote: inspector.as_ref().map(|i| i.remote_version(spec.name())),
            });
        }
        Ok(statuses)
    }

    /// Run the restart sequence regardless of what changed
    pub fn restart(&self, profile: &Profile, events: Arc<dyn DeployEventSink>) -> Pk3Result<bool> {
        events.on_event(DeployEvent::PhaseStarted(Phase::Restart));
        ServiceControl::new(&self.transport, profile, events.as_ref()).restart()
    }

    fn build_pass<'a>(
        &self,
        options: &DeployOptions,
        artifacts: &'a [ArtifactSpec],
        events: &dyn DeployEventSink,
        report: &mut DeployReport,
    ) -> Pk3Result<Vec<PlannedArtifact<'a>>> {
        let oracle = VersionOracle::new(&self.vcs, &options.repo_root);
        let builder = ArchiveBuilder::new(&options.repo_root, options.mode);
        let mut planned = Vec::with_capacity(artifacts.len());

        events.on_event(DeployEvent::PhaseStarted(Phase::Build));
        for spec in artifacts {
            let version = oracle.compute(&spec.source_paths())?;
            let archive = options.archive_path(spec.name());
            tracing::debug!(artifact = spec.name(), %version, archive = %archive.display(), "planned");

            match build_decision(options.mode, &version, || read_embedded_version(&archive)) {
                Decision::Proceed => {
                    events.on_event(DeployEvent::Building {
                        name: spec.name().to_string(),
                    });
                    builder.build(spec, &version, &archive)?;
                    report.built.push(spec.name().to_string());
                }
                Decision::Skip(reason) => skip(events, report, spec.name(), reason),
            }

            planned.push(PlannedArtifact {
                spec,
                version,
                archive,
            });
        }
        Ok(planned)
    }

    fn deploy_pass(
        &self,
        options: &DeployOptions,
        planned: &[PlannedArtifact<'_>],
        profile: &Profile,
        events: &dyn DeployEventSink,
        report: &mut DeployReport,
    ) -> Pk3Result<()> {
        let inspector = RemoteInspector::new(&self.transport, profile);
        let layout = profile.layout();

        events.on_event(DeployEvent::PhaseStarted(Phase::Deploy));
        for artifact in planned {
            let name = artifact.spec.name();
            let decision = deploy_decision(
                options.mode,
                &artifact.version,
                artifact.archive.is_file(),
                || inspector.remote_version(name),
            );

            match decision {
                Decision::Proceed => {
                    events.on_event(DeployEvent::Deploying {
                        name: name.to_string(),
                    });
                    self.transport
                        .push(&profile.host, &artifact.archive, &layout.pk3_dir())?;
                    exec_checked(&self.transport, &profile.host, &install_command(&layout, name))?;
                    report.deployed.push(name.to_string());
                }
                Decision::Skip(reason) => skip(events, report, name, reason),
            }
        }
        Ok(())
    }

    fn sync_extras(
        &self,
        options: &DeployOptions,
        profile: &Profile,
        events: &dyn DeployEventSink,
        report: &mut DeployReport,
    ) -> Pk3Result<()> {
        let sync = ExtraFileSync::new(&self.transport, profile);

        for extra in &profile.extra_files {
            let local = options.resolve(extra);
            let name = local
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| local.display().to_string());

            if sync.sync(&local)? {
                events.on_event(DeployEvent::ExtraDeployed { name: name.clone() });
                report.extras_deployed.push(name);
            } else {
                skip(events, report, &name, SkipReason::UpToDate);
            }
        }
        Ok(())
    }
}

fn skip(events: &dyn DeployEventSink, report: &mut DeployReport, name: &str, reason: SkipReason) {
    events.on_event(DeployEvent::Skipped {
        name: name.to_string(),
        reason,
    });
    report.skipped.push((name.to_string(), reason));
}
