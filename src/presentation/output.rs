//! Output Rendering
//!
//! Text rendering for command results. Progress lines during a run come
//! from the console event sink; this module renders the final summaries.

use crossterm::style::Stylize;

use crate::application::{ArtifactStatus, DeployReport};
use crate::domain::value_objects::{Revision, SourceVersion};

/// Render the `status` table, one artifact per line
pub fn render_status(statuses: &[ArtifactStatus], color: bool) -> String {
    let width = statuses.iter().map(|s| s.name.len()).max().unwrap_or(0);
    let mut out = String::new();

    for status in statuses {
        let mut line = format!(
            "{:<width$}  source {:<12}  local {:<12}",
            status.name,
            source_label(&status.source),
            revision_label(status.local.as_ref()),
            width = width
        );
        if let Some(remote) = &status.remote {
            line.push_str(&format!("  remote {:<12}", revision_label(remote.as_ref())));
        }

        let state = state_label(status);
        let state = if !color {
            state.to_string()
        } else if state == "up to date" {
            state.green().to_string()
        } else {
            state.yellow().to_string()
        };
        out.push_str(line.trim_end());
        out.push_str("  ");
        out.push_str(&state);
        out.push('\n');
    }

    out
}

/// One-line summary of a deploy run
pub fn render_summary(report: &DeployReport) -> String {
    let mut parts = vec![
        format!("{} built", report.built.len()),
        format!("{} deployed", report.deployed.len()),
    ];
    if !report.extras_deployed.is_empty() {
        parts.push(format!("{} extra files", report.extras_deployed.len()));
    }
    if report.restarted {
        parts.push("server restarted".to_string());
    }
    parts.join(", ")
}

fn source_label(version: &SourceVersion) -> String {
    match version {
        SourceVersion::Committed(rev) => rev.short().to_string(),
        other => other.to_string(),
    }
}

fn revision_label(revision: Option<&Revision>) -> &str {
    revision.map(Revision::short).unwrap_or("-")
}

fn state_label(status: &ArtifactStatus) -> &'static str {
    if !status.source.is_committed() {
        return "uncommitted changes";
    }
    if !status.local_up_to_date() {
        return "needs build";
    }
    match status.remote_up_to_date() {
        Some(false) => "needs deploy",
        _ => "up to date",
    }
}
