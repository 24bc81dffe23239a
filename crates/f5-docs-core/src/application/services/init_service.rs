//! Init Service - scaffolds the `.f5/docs/` workspace.
//!
//! Workflow:
//! 1. Refuse (without error) if the docs root exists and `force` is off
//! 2. Resolve and render the README template
//! 3. Create the five section directories
//! 4. Write `README.md`

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::{Clock, Filesystem, TemplateRenderer, TemplateStore},
        services::today_string,
    },
    domain::{
        DOCS_DIR, DocLanguage, DocsLayout, RenderContext, TemplateKind, TemplateOrigin,
        validate_template_name,
    },
    error::{DocsError, DocsResult},
};

/// Input of `f5 docs init`.
#[derive(Debug, Clone)]
pub struct InitRequest {
    pub project_root: PathBuf,
    pub project_name: String,
    /// README template name, e.g. `default`.
    pub template: String,
    pub language: DocLanguage,
    pub force: bool,
}

/// Result of `f5 docs init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// `.f5/docs` was already there and `force` was off. Nothing was written.
    AlreadyExists { root: PathBuf },
    Created {
        root: PathBuf,
        directories: Vec<PathBuf>,
        readme: PathBuf,
        /// `README.md` existed and was replaced.
        overwritten: bool,
        template: TemplateOrigin,
    },
}

/// Scaffolds the documentation workspace.
pub struct InitService {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    clock: Box<dyn Clock>,
}

impl InitService {
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

    #[instrument(
        skip_all,
        fields(
            root = %request.project_root.display(),
            template = %request.template,
            lang = %request.language,
            force = request.force
        )
    )]
    pub fn init(&self, request: InitRequest) -> DocsResult<InitOutcome> {
        validate_template_name(&request.template).map_err(DocsError::Domain)?;

        let layout = DocsLayout::new(&request.project_root);
        let root = layout.root();

        if self.filesystem.exists(&root) && !request.force {
            info!(path = %root.display(), "Docs structure already exists, skipping");
            return Ok(InitOutcome::AlreadyExists { root });
        }

        // Resolve the template before touching the disk so an unknown name
        // leaves the project untouched.
        let template = self.store.get(
            TemplateKind::Readme,
            &request.template,
            Some(request.language),
        )?;
        debug!(origin = %template.origin, "README template resolved");

        let context = RenderContext::new()
            .with_variable("PROJECT_NAME", &request.project_name)
            .with_variable("DATE", today_string(self.clock.as_ref()))
            .with_variable("LANG", request.language.code())
            .with_variable("TEMPLATE", &request.template)
            .with_variable("DOCS_DIR", DOCS_DIR);
        let rendered = self.renderer.render(&template, &context)?;

        let directories = layout.section_dirs();
        for dir in &directories {
            self.filesystem.create_dir_all(dir)?;
        }

        let readme = layout.readme_path();
        let overwritten = self.filesystem.exists(&readme);
        self.filesystem.write_file(&readme, &rendered.content)?;

        info!(
            path = %root.display(),
            directories = directories.len(),
            overwritten,
            "Docs structure created"
        );

        Ok(InitOutcome::Created {
            root,
            directories,
            readme,
            overwritten,
            template: template.origin,
        })
    }
}
