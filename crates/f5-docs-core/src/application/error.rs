//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not invalid
//! input. Invalid input is `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No template with this kind/name in any store layer.
    #[error("Template not found: {kind}/{name}")]
    TemplateNotFound { kind: String, name: String },

    /// A file the user pointed at (`--prompt`, `--template`) does not exist.
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A `git` invocation failed or produced unusable output.
    #[error("git {command} failed: {reason}")]
    VersionControl { command: String, reason: String },

    /// Store access failed (lock poisoned).
    #[error("Template store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { kind, name } => vec![
                format!("No '{name}' template of kind '{kind}' is available"),
                "List available templates: f5 docs templates".into(),
                format!("Or add your own at .f5/templates/{kind}/{name}.md"),
            ],
            Self::FileNotFound { path } => vec![
                format!("Check the path: {}", path.display()),
                "Relative paths are resolved against the current directory".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::VersionControl { .. } => vec![
                "Ensure git is installed and in your PATH".into(),
                "Run the command from inside a git repository".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } | Self::FileNotFound { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. }
            | Self::VersionControl { .. }
            | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
