use thiserror::Error;

use crate::domain::{DocLanguage, Framework, TemplateKind};
use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Unknown framework '{value}'")]
    UnknownFramework { value: String },

    #[error("Unknown documentation language '{value}'")]
    UnknownLanguage { value: String },

    #[error("Unknown template kind '{value}'")]
    UnknownTemplateKind { value: String },

    #[error("Invalid version label '{label}': {reason}")]
    InvalidVersionLabel { label: String, reason: String },

    #[error("Invalid template name '{name}': {reason}")]
    InvalidTemplateName { name: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownFramework { .. } => {
                let mut out = vec!["Supported frameworks:".to_string()];
                out.extend(Framework::ALL.iter().map(|f| format!("  • {f}")));
                out.push("Example: f5 docs analyze --framework nestjs".into());
                out
            }
            Self::UnknownLanguage { .. } => {
                let mut out = vec!["Supported documentation languages:".to_string()];
                out.extend(
                    DocLanguage::ALL
                        .iter()
                        .map(|l| format!("  • {} ({})", l.code(), l.display_name())),
                );
                out
            }
            Self::UnknownTemplateKind { .. } => {
                let mut out = vec!["Template kinds:".to_string()];
                out.extend(TemplateKind::ALL.iter().map(|k| format!("  • {k}")));
                out
            }
            Self::InvalidVersionLabel { .. } => vec![
                "Version labels are used as file names and git revisions".into(),
                "Use a label without spaces or path separators".into(),
                "Examples: v2.0, phase-3, 2026.10".into(),
            ],
            Self::InvalidTemplateName { .. } => vec![
                "Template names map to '<kind>/<name>.md' files".into(),
                "Use letters, digits, '-' and '_' only".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}
