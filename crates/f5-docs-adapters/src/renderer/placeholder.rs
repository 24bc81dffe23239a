//! `{{NAME}}` substitution renderer.

use f5_docs_core::{
    application::ports::{Rendered, TemplateRenderer},
    domain::{RenderContext, Template},
    error::DocsResult,
};
use tracing::{instrument, trace};

/// Renderer using plain placeholder substitution. Unknown placeholders are
/// kept verbatim and reported in [`Rendered::unresolved`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    #[instrument(skip_all, fields(kind = %template.kind, name = %template.name))]
    fn render(&self, template: &Template, context: &RenderContext) -> DocsResult<Rendered> {
        let content = context.render(&template.body);
        let unresolved = context.unresolved(&template.body);
        trace!(bytes = content.len(), unresolved = unresolved.len(), "rendered");
        Ok(Rendered {
            content,
            unresolved,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use f5_docs_core::domain::TemplateKind;

    #[test]
    fn substitutes_and_reports_unknown_tokens() {
        let template = Template::builtin(
            TemplateKind::Changelog,
            "t",
            None,
            "# {{VERSION}} ({{DATE}})\n{{OWNER}}\n",
        );
        let ctx = RenderContext::new()
            .with_variable("VERSION", "v2.0")
            .with_variable("DATE", "2026-10-19");

        let rendered = PlaceholderRenderer::new().render(&template, &ctx).unwrap();

        assert_eq!(rendered.content, "# v2.0 (2026-10-19)\n{{OWNER}}\n");
        assert_eq!(rendered.unresolved, vec!["OWNER".to_string()]);
    }

    #[test]
    fn value_with_braces_is_not_reported() {
        let template = Template::builtin(TemplateKind::Readme, "t", None, "{{A}}");
        let ctx = RenderContext::new().with_variable("A", "{{B}}");

        let rendered = PlaceholderRenderer::new().render(&template, &ctx).unwrap();

        assert_eq!(rendered.content, "{{B}}");
        assert!(rendered.unresolved.is_empty());
    }
}
