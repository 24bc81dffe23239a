//! Infrastructure adapters for f5 docs.
//!
//! This crate implements the ports defined in `f5_docs_core::application::ports`.
//! It contains all I/O: the filesystem, bundled and on-disk templates, the
//! `git` subprocess and the system clock.

pub mod clock;
pub mod filesystem;
pub mod git;
pub mod renderer;
pub mod templates;

// Re-export commonly used adapters
pub use clock::{FixedClock, SystemClock};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use git::GitCli;
pub use renderer::PlaceholderRenderer;
pub use templates::{BuiltinTemplates, LayeredTemplateStore};
