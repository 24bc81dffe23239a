//! Template Catalog - what templates are visible and which placeholders they use.

use serde::Serialize;

use crate::{
    application::ports::TemplateStore,
    domain::{DocLanguage, Template, TemplateKind, TemplateOrigin},
    error::DocsResult,
};

/// Template metadata for listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub kind: TemplateKind,
    pub name: String,
    pub language: Option<DocLanguage>,
    pub origin: TemplateOrigin,
    pub placeholders: Vec<String>,
}

impl From<&Template> for TemplateInfo {
    fn from(template: &Template) -> Self {
        Self {
            kind: template.kind,
            name: template.name.clone(),
            language: template.language,
            origin: template.origin.clone(),
            placeholders: template.placeholders(),
        }
    }
}

pub struct TemplateCatalog {
    store: Box<dyn TemplateStore>,
}

impl TemplateCatalog {
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// List templates sorted by kind, name and language.
    pub fn list(&self, kind: Option<TemplateKind>) -> DocsResult<Vec<TemplateInfo>> {
        let mut infos: Vec<TemplateInfo> =
            self.store.list(kind)?.iter().map(TemplateInfo::from).collect();
        infos.sort_by(|a, b| {
            (a.kind, &a.name, a.language.map(|l| l.code()))
                .cmp(&(b.kind, &b.name, b.language.map(|l| l.code())))
        });
        Ok(infos)
    }
}
