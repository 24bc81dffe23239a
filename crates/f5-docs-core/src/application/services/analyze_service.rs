//! Analyze Service - detect the framework and render the matching AI prompt.
//!
//! No source code is parsed here. The rendered prompt is handed to an
//! external assistant, which does the actual analysis.

use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Clock, Filesystem, TemplateRenderer, TemplateStore},
        services::today_string,
    },
    domain::{
        AnalysisPlan, DOCS_DIR, DetectedBy, DocsLayout, Framework, PromptSource, RenderContext,
        Scope, Template, TemplateKind, TemplateOrigin, detect,
    },
    error::DocsResult,
};

/// Input of `f5 docs analyze`.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeRequest {
    pub project_root: PathBuf,
    pub project_name: String,
    /// `--framework`; skips detection.
    pub framework: Option<Framework>,
    pub scope: Scope,
    /// Where the assistant should write docs. Defaults to `.f5/docs`.
    pub output_dir: Option<PathBuf>,
    /// `--prompt <FILE>`; replaces the framework prompt.
    pub prompt: Option<PathBuf>,
    pub dry_run: bool,
}

/// A prompt ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPrompt {
    pub content: String,
    pub origin: TemplateOrigin,
    pub unresolved: Vec<String>,
}

/// Result of `f5 docs analyze`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeOutcome {
    pub plan: AnalysisPlan,
    /// `None` on a dry run.
    pub prompt: Option<RenderedPrompt>,
}

pub struct AnalyzeService {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    clock: Box<dyn Clock>,
}

impl AnalyzeService {
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
            clock,
        }
    }

    /// Decide framework, scope and prompt without loading anything.
    #[instrument(skip_all, fields(root = %request.project_root.display()))]
    pub fn plan(&self, request: &AnalyzeRequest) -> AnalysisPlan {
        let layout = DocsLayout::new(&request.project_root);

        let (framework, detected_by, also_matched) = match request.framework {
            Some(framework) => (framework, DetectedBy::Override, Vec::new()),
            None => {
                let detection =
                    detect(|marker| self.filesystem.exists(&layout.marker_path(marker)));
                if detection.is_ambiguous() {
                    warn!(
                        framework = %detection.framework,
                        also_matched = ?detection.also_matched,
                        "Several framework markers found; keeping the first match"
                    );
                }
                let by = match detection.marker {
                    Some(marker) => DetectedBy::Marker(marker.to_string()),
                    None => DetectedBy::Fallback,
                };
                (
                    detection.framework,
                    by,
                    detection.also_matched.iter().map(|m| m.to_string()).collect(),
                )
            }
        };
        debug!(%framework, by = %detected_by, "Framework decided");

        let prompt = match &request.prompt {
            Some(path) => PromptSource::File(path.clone()),
            None => PromptSource::Template(framework.prompt_name().to_string()),
        };

        AnalysisPlan {
            project_name: request.project_name.clone(),
            project_root: request.project_root.clone(),
            framework,
            detected_by,
            also_matched,
            scope: request.scope.clone(),
            output_dir: request
                .output_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(DOCS_DIR)),
            prompt,
        }
    }

    /// Plan, then (unless dry-run) load and render the prompt.
    #[instrument(skip_all, fields(dry_run = request.dry_run))]
    pub fn analyze(&self, request: &AnalyzeRequest) -> DocsResult<AnalyzeOutcome> {
        let plan = self.plan(request);

        if request.dry_run {
            info!("Dry run: prompt not rendered");
            return Ok(AnalyzeOutcome { plan, prompt: None });
        }

        let template = self.load_prompt(&plan.prompt)?;
        let context = self.context_for(&plan);
        let rendered = self.renderer.render(&template, &context)?;

        if !rendered.unresolved.is_empty() {
            warn!(unresolved = ?rendered.unresolved, "Prompt has unresolved placeholders");
        }
        info!(framework = %plan.framework, origin = %template.origin, "Prompt rendered");

        Ok(AnalyzeOutcome {
            plan,
            prompt: Some(RenderedPrompt {
                content: rendered.content,
                origin: template.origin,
                unresolved: rendered.unresolved,
            }),
        })
    }

    fn load_prompt(&self, source: &PromptSource) -> DocsResult<Template> {
        match source {
            PromptSource::Template(name) => self.store.get(TemplateKind::Prompt, name, None),
            PromptSource::File(path) => {
                if !self.filesystem.exists(path) {
                    return Err(ApplicationError::FileNotFound { path: path.clone() }.into());
                }
                let body = self.filesystem.read_to_string(path)?;
                Ok(Template::from_file(TemplateKind::Prompt, path, body))
            }
        }
    }

    fn context_for(&self, plan: &AnalysisPlan) -> RenderContext {
        RenderContext::new()
            .with_variable("PROJECT_NAME", &plan.project_name)
            .with_variable("FRAMEWORK", plan.framework.display_name())
            .with_variable("OUTPUT_DIR", plan.output_dir.display().to_string())
            .with_variable("SCOPE", plan.scope.describe())
            .with_variable("DATE", today_string(self.clock.as_ref()))
            .with_variable("DOCS_DIR", DOCS_DIR)
    }
}
