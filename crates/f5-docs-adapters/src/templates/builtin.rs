//! Templates that ship inside the binary.

use f5_docs_core::{
    application::ports::TemplateStore,
    domain::{DocLanguage, Template, TemplateKind},
    error::DocsResult,
};

use super::{not_found, pick};

/// One row of the built-in registry.
struct BuiltinEntry {
    kind: TemplateKind,
    name: &'static str,
    language: Option<DocLanguage>,
    body: &'static str,
}

const fn entry(
    kind: TemplateKind,
    name: &'static str,
    language: Option<DocLanguage>,
    body: &'static str,
) -> BuiltinEntry {
    BuiltinEntry {
        kind,
        name,
        language,
        body,
    }
}

use TemplateKind::{Changelog, Prompt, Readme};

static BUILTIN: &[BuiltinEntry] = &[
    // ── README ───────────────────────────────────────────────────────────
    entry(Readme, "default", None, include_str!("../../templates/readme/default.md")),
    entry(
        Readme,
        "default",
        Some(DocLanguage::Vi),
        include_str!("../../templates/readme/default.vi.md"),
    ),
    entry(
        Readme,
        "default",
        Some(DocLanguage::Ja),
        include_str!("../../templates/readme/default.ja.md"),
    ),
    entry(Readme, "minimal", None, include_str!("../../templates/readme/minimal.md")),
    // ── Prompts ──────────────────────────────────────────────────────────
    entry(Prompt, "laravel", None, include_str!("../../templates/prompts/laravel.md")),
    entry(Prompt, "nestjs", None, include_str!("../../templates/prompts/nestjs.md")),
    entry(Prompt, "django", None, include_str!("../../templates/prompts/django.md")),
    entry(Prompt, "spring", None, include_str!("../../templates/prompts/spring.md")),
    entry(Prompt, "go", None, include_str!("../../templates/prompts/go.md")),
    entry(Prompt, "generic", None, include_str!("../../templates/prompts/generic.md")),
    // ── Changelog ────────────────────────────────────────────────────────
    entry(Changelog, "default", None, include_str!("../../templates/changelog/default.md")),
];

/// Read-only store over the compiled-in templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    pub fn new() -> Self {
        Self
    }

    fn all() -> Vec<Template> {
        BUILTIN
            .iter()
            .map(|e| Template::builtin(e.kind, e.name, e.language, e.body))
            .collect()
    }
}

impl TemplateStore for BuiltinTemplates {
    fn get(
        &self,
        kind: TemplateKind,
        name: &str,
        language: Option<DocLanguage>,
    ) -> DocsResult<Template> {
        let all = Self::all();
        pick(all.iter().filter(|t| t.kind == kind), name, language)
            .cloned()
            .ok_or_else(|| not_found(kind, name))
    }

    fn list(&self, kind: Option<TemplateKind>) -> DocsResult<Vec<Template>> {
        Ok(Self::all()
            .into_iter()
            .filter(|t| kind.is_none_or(|k| t.kind == k))
            .collect())
    }
}
