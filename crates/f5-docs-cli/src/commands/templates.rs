//! `f5 docs templates`: list what `init`, `analyze` and `version` can use.

use std::path::Path;

use owo_colors::OwoColorize;

use f5_docs_core::application::{TemplateCatalog, TemplateInfo};

use super::template_store;
use crate::{cli::TemplatesArgs, config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(
    args: TemplatesArgs,
    project_root: &Path,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let catalog = TemplateCatalog::new(Box::new(template_store(config, project_root)));
    let templates = catalog.list(args.kind.map(Into::into))?;

    if output.is_json() {
        output.json(&templates)?;
        return Ok(());
    }

    if templates.is_empty() {
        output.info("No templates found")?;
        return Ok(());
    }

    output.header(&format!("Available templates ({}):", templates.len()))?;
    output.print("")?;
    for info in &templates {
        output.print(&row(info, output.supports_color()))?;
    }
    output.print("")?;
    output.info("Override any of these under .f5/templates/<kind>/<name>[.<lang>].md")?;

    Ok(())
}

fn row(info: &TemplateInfo, color: bool) -> String {
    let lang = info.language.map(|l| l.code()).unwrap_or("-");
    let id = format!("{}/{}", info.kind, info.name);
    let origin = info.origin.to_string();
    if color {
        format!("  {:<22} {:<4} {}", id.bold(), lang, origin.dimmed())
    } else {
        format!("  {id:<22} {lang:<4} {origin}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use f5_docs_core::domain::{DocLanguage, TemplateKind, TemplateOrigin};

    #[test]
    fn plain_row_has_columns() {
        let info = TemplateInfo {
            kind: TemplateKind::Readme,
            name: "default".into(),
            language: Some(DocLanguage::Vi),
            origin: TemplateOrigin::Builtin,
            placeholders: vec!["PROJECT_NAME".into()],
        };
        let line = row(&info, false);
        assert!(line.contains("readme/default"));
        assert!(line.contains("vi"));
        assert!(line.ends_with("builtin"));
    }
}
