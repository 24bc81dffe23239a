//! Template stores.
//!
//! - [`BuiltinTemplates`]: markdown compiled into the binary.
//! - [`LayeredTemplateStore`]: on-disk override directories searched before
//!   the built-ins.

mod builtin;
mod layered;

pub use builtin::BuiltinTemplates;
pub use layered::LayeredTemplateStore;

use f5_docs_core::{
    application::ApplicationError,
    domain::{DocLanguage, Template, TemplateKind},
    error::DocsError,
};

pub(crate) fn not_found(kind: TemplateKind, name: &str) -> DocsError {
    ApplicationError::TemplateNotFound {
        kind: kind.dir_name().to_string(),
        name: name.to_string(),
    }
    .into()
}

/// Pick `name` from `candidates`, preferring the `language` variant and
/// falling back to the language-neutral one.
pub(crate) fn pick<'a>(
    candidates: impl Iterator<Item = &'a Template> + Clone,
    name: &str,
    language: Option<DocLanguage>,
) -> Option<&'a Template> {
    let mut named = candidates.filter(|t| t.name == name);
    if let Some(lang) = language {
        if let Some(found) = named.clone().find(|t| t.language == Some(lang)) {
            return Some(found);
        }
    }
    named.find(|t| t.language.is_none())
}
