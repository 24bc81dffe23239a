//! Core domain layer for f5 docs.
//!
//! Pure logic with no I/O: framework detection rules, the `.f5/docs/` layout,
//! placeholder rendering, version labels and git ranges. Everything that
//! touches the filesystem, the clock or `git` goes through the ports in
//! `crate::application::ports`.

pub mod detection;
pub mod error;
pub mod framework;
pub mod layout;
pub mod plan;
pub mod template;
pub mod version;

pub use detection::{DETECTION_RULES, Detection, MarkerRule, detect};
pub use error::DomainError;
pub use framework::{DocLanguage, Framework};
pub use layout::{DOCS_DIR, DocsLayout, SECTIONS};
pub use plan::{AnalysisPlan, DetectedBy, PromptSource, Scope};
pub use template::{
    RenderContext, Template, TemplateKind, TemplateOrigin, placeholders_in,
    validate_template_name,
};
pub use version::{GIT_UNAVAILABLE, GitRange, GitReport, GitSummary, INITIAL_VERSION, VersionLabel};

pub use crate::error::ErrorCategory;
