//! `f5 docs analyze`: detect the framework and print the prompt.
//!
//! The prompt goes to stdout so it can be piped into an assistant or the
//! clipboard; everything else goes to stderr via tracing.

use std::path::Path;
use std::str::FromStr;

use tracing::instrument;

use f5_docs_adapters::{LocalFilesystem, PlaceholderRenderer, SystemClock};
use f5_docs_core::{
    application::{AnalyzeRequest, AnalyzeService},
    domain::{AnalysisPlan, Framework, Scope},
    error::DocsError,
};

use super::{project_name, template_store};
use crate::{
    cli::AnalyzeArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(
    args: AnalyzeArgs,
    project_root: &Path,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let request = build_request(args, project_root, config)?;

    let service = AnalyzeService::new(
        Box::new(template_store(config, project_root)),
        Box::new(PlaceholderRenderer::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(SystemClock),
    );

    let outcome = service.analyze(&request)?;

    match outcome.prompt {
        None => print_plan(&outcome.plan, output)?,
        Some(prompt) => {
            if !prompt.unresolved.is_empty() {
                output.warning(&format!(
                    "Unresolved placeholders left in prompt: {}",
                    prompt.unresolved.join(", ")
                ))?;
            }
            output.emit(&prompt.content)?;
        }
    }

    Ok(())
}

fn build_request(
    args: AnalyzeArgs,
    project_root: &Path,
    config: &AppConfig,
) -> CliResult<AnalyzeRequest> {
    let framework = args
        .framework
        .as_deref()
        .map(parse_framework)
        .transpose()?;

    Ok(AnalyzeRequest {
        project_root: project_root.to_path_buf(),
        project_name: project_name(config, project_root),
        framework,
        scope: Scope::new(args.modules, args.entities),
        output_dir: args.output,
        prompt: args.prompt,
        dry_run: args.dry_run,
    })
}

fn parse_framework(value: &str) -> CliResult<Framework> {
    Ok(Framework::from_str(value).map_err(DocsError::from)?)
}

fn print_plan(plan: &AnalysisPlan, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        output.json(plan)?;
        return Ok(());
    }

    // A dry run's plan is its payload, so it prints even under --quiet.
    let mut lines = vec![
        "Analysis plan (dry run)".to_string(),
        format!("  project:   {}", plan.project_name),
        format!(
            "  framework: {} ({})",
            plan.framework.display_name(),
            plan.detected_by
        ),
    ];
    if !plan.also_matched.is_empty() {
        lines.push(format!("  also seen: {}", plan.also_matched.join(", ")));
    }
    lines.push(format!("  scope:     {}", plan.scope));
    lines.push(format!("  output:    {}", plan.output_dir.display()));
    lines.push(format!("  prompt:    {}", plan.prompt));
    lines.push("No prompt rendered. Re-run without --dry-run to print it.".to_string());

    output.emit(&lines.join("\n"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use f5_docs_core::domain::DomainError;

    use crate::error::CliError;

    fn args() -> AnalyzeArgs {
        AnalyzeArgs {
            modules: vec!["orders".into()],
            entities: vec![],
            framework: None,
            output: None,
            prompt: None,
            dry_run: true,
        }
    }

    #[test]
    fn framework_override_is_parsed() {
        let mut a = args();
        a.framework = Some("Django".into());

        let request = build_request(a, Path::new("/w/api"), &AppConfig::default()).unwrap();

        assert_eq!(request.framework, Some(Framework::Django));
        assert_eq!(request.scope.modules, vec!["orders"]);
        assert_eq!(request.project_root, PathBuf::from("/w/api"));
    }

    #[test]
    fn unknown_framework_lists_choices() {
        let mut a = args();
        a.framework = Some("rails".into());

        let err = build_request(a, Path::new("/w/api"), &AppConfig::default()).unwrap_err();

        assert!(matches!(
            err,
            CliError::Core(DocsError::Domain(DomainError::UnknownFramework { ref value }))
                if value == "rails"
        ));
        assert_eq!(err.exit_code(), 2);
        assert!(err.suggestions().iter().any(|s| s.contains("laravel")));
    }
}
