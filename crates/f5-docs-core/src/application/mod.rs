//! Application layer for f5 docs.
//!
//! This layer contains:
//! - **Services**: use case orchestration (init, analyze, version, template listing)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! Business rules (detection order, layout, placeholder syntax) live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    AnalyzeOutcome, AnalyzeRequest, AnalyzeService, InitOutcome, InitRequest, InitService,
    RenderedPrompt, TemplateCatalog, TemplateInfo, VersionOutcome, VersionRequest,
    VersionService,
};

pub use ports::{Clock, Filesystem, Rendered, TemplateRenderer, TemplateStore, VersionControl};

pub use error::ApplicationError;
