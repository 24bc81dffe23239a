//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `f5-docs-adapters` implement
//! these.
//!
//! ## Driven (Output) Ports
//!
//! - `Filesystem`: file and directory operations
//! - `TemplateStore`: template lookup and listing
//! - `TemplateRenderer`: placeholder substitution
//! - `VersionControl`: commit counts and diff stats from `git`
//! - `Clock`: today's date

pub mod output;

pub use output::{Clock, Filesystem, Rendered, TemplateRenderer, TemplateStore, VersionControl};
