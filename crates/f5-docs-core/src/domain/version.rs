//! Version labels, git ranges and the changelog git summary.

use std::fmt;

use serde::Serialize;

use crate::domain::DomainError;

/// Text substituted for `{{GIT_SUMMARY}}` whenever git could not be queried.
pub const GIT_UNAVAILABLE: &str = "_Git analysis unavailable._";

/// Value of `{{FROM_VERSION}}` when no base version is known.
pub const INITIAL_VERSION: &str = "initial";

// ── VersionLabel ─────────────────────────────────────────────────────────────

/// A version or phase label such as `v2.0` or `phase-3`.
///
/// The label becomes both a file name (`versions/<label>.md`) and, when it
/// names a tag, a git revision, so it must be safe as either.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VersionLabel(String);

impl VersionLabel {
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        let invalid = |reason: &str| DomainError::InvalidVersionLabel {
            label: raw.clone(),
            reason: reason.into(),
        };

        if raw.is_empty() {
            return Err(invalid("label cannot be empty"));
        }
        if raw == "." || raw == ".." {
            return Err(invalid("label cannot be a relative path"));
        }
        if raw.starts_with('-') {
            return Err(invalid("label cannot start with '-'"));
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(invalid("label cannot contain whitespace"));
        }
        if raw.contains('/') || raw.contains('\\') {
            return Err(invalid("label cannot contain path separators"));
        }
        if raw.contains("..") {
            return Err(invalid("label cannot contain '..'"));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── GitRange ─────────────────────────────────────────────────────────────────

/// A commit range `from..to`, or everything reachable from `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitRange {
    pub from: Option<String>,
    pub to: String,
}

impl GitRange {
    pub fn new(from: Option<String>, to: impl Into<String>) -> Self {
        Self {
            from,
            to: to.into(),
        }
    }

    /// Revision argument for `git rev-list`.
    pub fn rev_spec(&self) -> String {
        match &self.from {
            Some(from) => format!("{from}..{}", self.to),
            None => self.to.clone(),
        }
    }
}

impl fmt::Display for GitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rev_spec())
    }
}

// ── GitSummary / GitReport ───────────────────────────────────────────────────

/// Commit count and diff stat for a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitSummary {
    pub range: GitRange,
    pub commit_count: u64,
    /// Output of `git diff --stat`, trimmed. May be empty.
    pub diff_stat: String,
}

impl GitSummary {
    /// Markdown block substituted for `{{GIT_SUMMARY}}`.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str("## Git Summary\n\n");
        out.push_str(&format!("- Range: `{}`\n", self.range));
        out.push_str(&format!("- Commits: {}\n", self.commit_count));
        if !self.diff_stat.is_empty() {
            out.push_str("\n```text\n");
            out.push_str(&self.diff_stat);
            out.push_str("\n```\n");
        }
        out
    }
}

/// What the changelog says about git.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GitReport {
    Included(GitSummary),
    Unavailable { reason: String },
    NotRequested,
}

impl GitReport {
    pub fn to_markdown(&self) -> String {
        match self {
            Self::Included(summary) => summary.to_markdown(),
            Self::Unavailable { .. } => format!("## Git Summary\n\n{GIT_UNAVAILABLE}\n"),
            Self::NotRequested => String::new(),
        }
    }

    pub fn commit_count(&self) -> Option<u64> {
        match self {
            Self::Included(summary) => Some(summary.commit_count),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_labels() {
        for label in ["v2.0", "phase-3", "2026.10", "v1.0.0-rc.1", "release_7"] {
            assert!(VersionLabel::parse(label).is_ok(), "rejected {label}");
        }
    }

    #[test]
    fn rejects_unsafe_labels() {
        for label in ["", ".", "..", "-x", "v 2", "a/b", "a\\b", "v1..v2"] {
            assert!(
                matches!(
                    VersionLabel::parse(label),
                    Err(DomainError::InvalidVersionLabel { .. })
                ),
                "accepted {label:?}"
            );
        }
    }

    #[test]
    fn rev_spec_with_and_without_base() {
        assert_eq!(
            GitRange::new(Some("v1.0".into()), "v2.0").rev_spec(),
            "v1.0..v2.0"
        );
        assert_eq!(GitRange::new(None, "HEAD").rev_spec(), "HEAD");
    }

    #[test]
    fn summary_markdown_has_count_and_stat() {
        let summary = GitSummary {
            range: GitRange::new(Some("v1.0".into()), "v2.0"),
            commit_count: 12,
            diff_stat: " 3 files changed, 10 insertions(+)".into(),
        };
        let md = summary.to_markdown();
        assert!(md.contains("Commits: 12"));
        assert!(md.contains("`v1.0..v2.0`"));
        assert!(md.contains("3 files changed"));
    }

    #[test]
    fn unavailable_report_uses_fixed_text() {
        let report = GitReport::Unavailable {
            reason: "not a git repository".into(),
        };
        assert!(report.to_markdown().contains(GIT_UNAVAILABLE));
        assert_eq!(report.commit_count(), None);
    }

    #[test]
    fn not_requested_renders_nothing() {
        assert!(GitReport::NotRequested.to_markdown().is_empty());
    }
}
