//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `f5-docs-adapters` crate provides implementations.

use std::path::Path;

use chrono::NaiveDate;

use crate::domain::{DocLanguage, GitRange, RenderContext, Template, TemplateKind};
use crate::error::DocsResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `f5_docs_adapters::filesystem::LocalFilesystem` (production)
/// - `f5_docs_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> DocsResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> DocsResult<()>;

    /// Read a UTF-8 file.
    fn read_to_string(&self, path: &Path) -> DocsResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template lookup.
///
/// Implemented by:
/// - `f5_docs_adapters::templates::BuiltinTemplates` (compiled in)
/// - `f5_docs_adapters::templates::LayeredTemplateStore` (override dirs, then built-ins)
pub trait TemplateStore: Send + Sync {
    /// Find a template by kind and name.
    ///
    /// With `language`, a localized variant is preferred and the
    /// language-neutral template is the fallback.
    fn get(
        &self,
        kind: TemplateKind,
        name: &str,
        language: Option<DocLanguage>,
    ) -> DocsResult<Template>;

    /// All visible templates, optionally restricted to one kind.
    fn list(&self, kind: Option<TemplateKind>) -> DocsResult<Vec<Template>>;
}

/// Output of a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub content: String,
    /// Placeholders left in `content` because the context had no value.
    pub unresolved: Vec<String>,
}

/// Port for template rendering.
///
/// Implemented by:
/// - `f5_docs_adapters::renderer::PlaceholderRenderer` (`{{NAME}}` substitution)
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template: &Template, context: &RenderContext) -> DocsResult<Rendered>;
}

/// Port for repository history queries.
///
/// Implemented by:
/// - `f5_docs_adapters::git::GitCli` (shells out to `git`)
pub trait VersionControl: Send + Sync {
    /// Whether `rev` names a commit.
    fn resolves(&self, rev: &str) -> bool;

    /// Nearest tag reachable from `rev`; `Ok(None)` when there is none.
    fn nearest_tag(&self, rev: &str) -> DocsResult<Option<String>>;

    /// Number of commits in `range`.
    fn commit_count(&self, range: &GitRange) -> DocsResult<u64>;

    /// `git diff --stat` between the ends of `range`.
    fn diff_stat(&self, range: &GitRange) -> DocsResult<String>;
}

/// Port for the current date.
///
/// Implemented by:
/// - `f5_docs_adapters::clock::SystemClock`
/// - `f5_docs_adapters::clock::FixedClock` (testing)
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
