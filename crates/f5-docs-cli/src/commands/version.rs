//! `f5 docs version <PHASE>`: write a changelog, optionally git-aware.

use std::path::Path;

use serde_json::json;
use tracing::instrument;

use f5_docs_adapters::{GitCli, LocalFilesystem, PlaceholderRenderer, SystemClock};
use f5_docs_core::{
    application::{VersionOutcome, VersionRequest, VersionService},
    domain::{GitReport, VersionLabel},
    error::DocsError,
};

use super::{display_path, project_name, template_store};
use crate::{cli::VersionArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(phase = %args.phase))]
pub fn execute(
    args: VersionArgs,
    project_root: &Path,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let request = build_request(args, project_root, config)?;

    let service = VersionService::new(
        Box::new(template_store(config, project_root)),
        Box::new(PlaceholderRenderer::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(GitCli::new(project_root)),
        Box::new(SystemClock),
    );

    let outcome = service.generate(&request)?;
    report(&request, &outcome, project_root, output)
}

/// `--git-analysis` or `git.analysis = true` turns git on.
fn build_request(
    args: VersionArgs,
    project_root: &Path,
    config: &AppConfig,
) -> CliResult<VersionRequest> {
    let label = VersionLabel::parse(args.phase).map_err(DocsError::Domain)?;

    Ok(VersionRequest {
        project_root: project_root.to_path_buf(),
        project_name: project_name(config, project_root),
        label,
        from: args.from,
        git_analysis: args.git_analysis || config.git.analysis,
        output: args.output.map(|p| project_root.join(p)),
        template: args.template.map(|p| project_root.join(p)),
    })
}

fn report(
    request: &VersionRequest,
    outcome: &VersionOutcome,
    project_root: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    if output.is_json() {
        output.json(&json!({
            "label": request.label.as_str(),
            "path": outcome.path,
            "overwritten": outcome.overwritten,
            "git": outcome.report,
            "commits": outcome.report.commit_count(),
            "unresolved": outcome.unresolved,
        }))?;
        return Ok(());
    }

    if outcome.overwritten {
        output.warning(&format!(
            "Replaced existing {}",
            display_path(&outcome.path, project_root)
        ))?;
    }
    output.success(&format!(
        "Changelog for {} written to {}",
        request.label,
        display_path(&outcome.path, project_root)
    ))?;

    match &outcome.report {
        GitReport::Included(summary) => {
            output.field("range", &summary.range.to_string())?;
            output.field("commits", &summary.commit_count.to_string())?;
        }
        GitReport::Unavailable { reason } => {
            output.warning(&format!("Git analysis unavailable: {reason}"))?;
        }
        GitReport::NotRequested => {}
    }

    if !outcome.unresolved.is_empty() {
        output.warning(&format!(
            "Unresolved placeholders left in changelog: {}",
            outcome.unresolved.join(", ")
        ))?;
    }

    Ok(())
}
