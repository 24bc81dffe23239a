//! Application services - orchestrate use cases.
//!
//! One service per `f5 docs` subcommand plus the template catalog. Services
//! own boxed ports and contain no I/O of their own.

pub mod analyze_service;
pub mod init_service;
pub mod template_catalog;
pub mod version_service;

pub use analyze_service::{AnalyzeOutcome, AnalyzeRequest, AnalyzeService, RenderedPrompt};
pub use init_service::{InitOutcome, InitRequest, InitService};
pub use template_catalog::{TemplateCatalog, TemplateInfo};
pub use version_service::{VersionOutcome, VersionRequest, VersionService};

use crate::application::ports::Clock;

/// `{{DATE}}` value: today as `YYYY-MM-DD`.
pub(crate) fn today_string(clock: &dyn Clock) -> String {
    clock.today().format("%Y-%m-%d").to_string()
}
