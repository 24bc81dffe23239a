//! On-disk template overrides layered over the built-ins.
//!
//! # Directory layout expected
//!
//! ```text
//! .f5/templates/
//! ├── readme/
//! │   ├── default.md        ← replaces the built-in `default`
//! │   └── default.vi.md     ← Vietnamese variant
//! ├── prompts/
//! │   └── laravel.md
//! └── changelog/
//!     └── release.md        ← new template, `--template`-free
//! ```
//!
//! Directories are searched in the order given; the first hit wins and the
//! built-ins come last.

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use f5_docs_core::{
    application::ports::TemplateStore,
    domain::{DocLanguage, Template, TemplateKind, TemplateOrigin, validate_template_name},
    error::{DocsError, DocsResult},
};

use super::{BuiltinTemplates, pick};
use crate::filesystem::map_io_error;

/// Override directories first, then [`BuiltinTemplates`].
#[derive(Debug, Clone, Default)]
pub struct LayeredTemplateStore {
    dirs: Vec<PathBuf>,
    builtin: BuiltinTemplates,
}

impl LayeredTemplateStore {
    /// Directories that do not exist are skipped at lookup time.
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        Self {
            dirs,
            builtin: BuiltinTemplates::new(),
        }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Every readable template file in one override directory.
    #[instrument(skip(self), fields(dir = %dir.display()))]
    fn scan(&self, dir: &Path, kind: TemplateKind) -> DocsResult<Vec<Template>> {
        let kind_dir = dir.join(kind.dir_name());
        if !kind_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut templates = Vec::new();
        for entry in WalkDir::new(&kind_dir).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(kind_dir.as_path()).to_path_buf();
                map_io_error(&path, e.into(), "walk template directory")
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let Some((name, language)) = parse_file_name(path) else {
                debug!(path = %path.display(), "not a template file, skipping");
                continue;
            };
            let body = fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read template"))?;
            templates.push(Template {
                kind,
                name,
                language,
                body,
                origin: TemplateOrigin::File(path.to_path_buf()),
            });
        }
        Ok(templates)
    }
}

/// `<name>.md` or `<name>.<lang>.md`.
fn parse_file_name(path: &Path) -> Option<(String, Option<DocLanguage>)> {
    let file_name = path.file_name()?.to_str()?;
    let stem = file_name.strip_suffix(".md")?;
    let (name, language) = match stem.rsplit_once('.') {
        Some((name, code)) => match code.parse::<DocLanguage>() {
            Ok(lang) => (name, Some(lang)),
            Err(_) => {
                warn!(file = file_name, "unknown language suffix, skipping template");
                return None;
            }
        },
        None => (stem, None),
    };
    if validate_template_name(name).is_err() {
        warn!(file = file_name, "invalid template name, skipping template");
        return None;
    }
    Some((name.to_string(), language))
}

impl TemplateStore for LayeredTemplateStore {
    fn get(
        &self,
        kind: TemplateKind,
        name: &str,
        language: Option<DocLanguage>,
    ) -> DocsResult<Template> {
        validate_template_name(name).map_err(DocsError::Domain)?;

        for dir in &self.dirs {
            let found = self.scan(dir, kind)?;
            if let Some(template) = pick(found.iter(), name, language) {
                debug!(origin = %template.origin, "template override found");
                return Ok(template.clone());
            }
        }
        self.builtin.get(kind, name, language)
    }

    /// Overrides shadow built-ins with the same kind, name and language.
    fn list(&self, kind: Option<TemplateKind>) -> DocsResult<Vec<Template>> {
        let kinds: Vec<TemplateKind> = match kind {
            Some(k) => vec![k],
            None => TemplateKind::ALL.to_vec(),
        };

        let mut seen = BTreeSet::new();
        let mut out = Vec::new();
        let layers = self
            .dirs
            .iter()
            .map(|dir| {
                kinds
                    .iter()
                    .map(|k| self.scan(dir, *k))
                    .collect::<DocsResult<Vec<_>>>()
                    .map(|v| v.into_iter().flatten().collect::<Vec<_>>())
            })
            .chain(std::iter::once(self.builtin.list(kind)));

        for layer in layers {
            for template in layer? {
                let key = (
                    template.kind,
                    template.name.clone(),
                    template.language.map(|l| l.code()),
                );
                if seen.insert(key) {
                    out.push(template);
                }
            }
        }
        Ok(out)
    }
}
