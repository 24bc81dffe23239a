//! `f5 docs init`: scaffold `.f5/docs/`.

use std::path::Path;
use std::str::FromStr;

use serde_json::json;
use tracing::instrument;

use f5_docs_adapters::{LocalFilesystem, PlaceholderRenderer, SystemClock};
use f5_docs_core::{
    application::{InitOutcome, InitRequest, InitService},
    domain::DocLanguage,
    error::DocsError,
};

use super::{display_path, project_name, template_store};
use crate::{cli::DocsInitArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(force = args.force))]
pub fn execute(
    args: DocsInitArgs,
    project_root: &Path,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let request = build_request(args, project_root, config)?;
    let language = request.language;

    let service = InitService::new(
        Box::new(template_store(config, project_root)),
        Box::new(PlaceholderRenderer::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(SystemClock),
    );

    match service.init(request)? {
        InitOutcome::AlreadyExists { root } => {
            if output.is_json() {
                output.json(&json!({
                    "status": "exists",
                    "root": root,
                }))?;
            } else {
                output.warning(&format!(
                    "{} already exists (use --force to rewrite the README)",
                    display_path(&root, project_root)
                ))?;
            }
        }
        InitOutcome::Created {
            root,
            directories,
            readme,
            overwritten,
            template,
        } => {
            if output.is_json() {
                output.json(&json!({
                    "status": "created",
                    "root": root,
                    "directories": directories,
                    "readme": readme,
                    "overwritten": overwritten,
                    "language": language,
                    "template": template,
                }))?;
                return Ok(());
            }

            output.success(&format!(
                "Documentation structure created at {}",
                display_path(&root, project_root)
            ))?;
            for dir in &directories {
                output.print(&format!("  {}/", display_path(dir, project_root)))?;
            }
            output.print(&format!("  {}", display_path(&readme, project_root)))?;
            if overwritten {
                output.warning("Existing README.md was overwritten")?;
            }
            output.field("template", &template.to_string())?;
            output.field("language", language.display_name())?;
            output.info("Next: f5 docs analyze")?;
        }
    }

    Ok(())
}

/// Flags first, then `docs.language` / `docs.template` from config.
fn build_request(
    args: DocsInitArgs,
    project_root: &Path,
    config: &AppConfig,
) -> CliResult<InitRequest> {
    let lang = args.lang.as_deref().unwrap_or(&config.docs.language);
    let language = DocLanguage::from_str(lang).map_err(DocsError::Domain)?;

    Ok(InitRequest {
        project_root: project_root.to_path_buf(),
        project_name: project_name(config, project_root),
        template: args.template.unwrap_or_else(|| config.docs.template.clone()),
        language,
        force: args.force,
    })
}
