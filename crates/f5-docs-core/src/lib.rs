//! f5 docs Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the `f5 docs`
//! command group: scaffolding a `.f5/docs/` workspace, rendering AI prompts
//! for a detected framework, and writing git-aware changelogs.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            f5-docs-cli (CLI)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (InitService, AnalyzeService,          │
//! │   VersionService, TemplateCatalog)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateStore, Renderer,   │
//! │  VersionControl, Clock)                 │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    f5-docs-adapters (Infrastructure)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use f5_docs_core::application::{InitRequest, InitService};
//! use f5_docs_core::domain::DocLanguage;
//!
//! let service = InitService::new(store, renderer, filesystem, clock);
//! let outcome = service.init(InitRequest {
//!     project_root: "./my-app".into(),
//!     project_name: "my-app".into(),
//!     template: "default".into(),
//!     language: DocLanguage::En,
//!     force: false,
//! })?;
//! ```

pub mod application;
pub mod domain;
pub mod error;

pub mod prelude {
    pub use crate::application::{
        AnalyzeRequest, AnalyzeService, InitRequest, InitService, TemplateCatalog,
        VersionRequest, VersionService,
        ports::{Clock, Filesystem, TemplateRenderer, TemplateStore, VersionControl},
    };
    pub use crate::domain::{
        AnalysisPlan, DocLanguage, DocsLayout, Framework, GitRange, GitReport, RenderContext,
        Template, TemplateKind, VersionLabel,
    };
    pub use crate::error::{DocsError, DocsResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
