//! Version Service - render a changelog for a version or phase.
//!
//! Git is optional garnish: when `git_analysis` is on, the changelog gets a
//! commit count and diff stat. Any git failure downgrades the summary to
//! [`GIT_UNAVAILABLE`](crate::domain::GIT_UNAVAILABLE); it never fails the
//! command.

use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Clock, Filesystem, TemplateRenderer, TemplateStore, VersionControl},
        services::today_string,
    },
    domain::{
        DOCS_DIR, DocsLayout, GitRange, GitReport, GitSummary, INITIAL_VERSION, RenderContext,
        Template, TemplateKind, VersionLabel,
    },
    error::DocsResult,
};

/// Name of the built-in changelog template.
pub const DEFAULT_CHANGELOG: &str = "default";

const GIT_SUMMARY: &str = "GIT_SUMMARY";

/// Input of `f5 docs version`.
#[derive(Debug, Clone)]
pub struct VersionRequest {
    pub project_root: PathBuf,
    pub project_name: String,
    pub label: VersionLabel,
    /// `--from`: base version or revision.
    pub from: Option<String>,
    pub git_analysis: bool,
    /// `--output`; defaults to `.f5/docs/versions/<label>.md`.
    pub output: Option<PathBuf>,
    /// `--template <FILE>`; replaces the built-in changelog template.
    pub template: Option<PathBuf>,
}

/// Result of `f5 docs version`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionOutcome {
    pub path: PathBuf,
    pub report: GitReport,
    /// The changelog file existed and was replaced.
    pub overwritten: bool,
    pub unresolved: Vec<String>,
}

pub struct VersionService {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    vcs: Box<dyn VersionControl>,
    clock: Box<dyn Clock>,
}

impl VersionService {
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        vcs: Box<dyn VersionControl>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
            vcs,
            clock,
        }
    }

    #[instrument(
        skip_all,
        fields(label = %request.label, from = ?request.from, git = request.git_analysis)
    )]
    pub fn generate(&self, request: &VersionRequest) -> DocsResult<VersionOutcome> {
        let layout = DocsLayout::new(&request.project_root);
        let template = self.load_template(request)?;

        let report = if request.git_analysis {
            self.git_report(&request.label, request.from.as_deref())
        } else {
            GitReport::NotRequested
        };

        let from_version = match (&request.from, &report) {
            (Some(from), _) => from.clone(),
            (None, GitReport::Included(GitSummary { range, .. })) => range
                .from
                .clone()
                .unwrap_or_else(|| INITIAL_VERSION.to_string()),
            (None, _) => INITIAL_VERSION.to_string(),
        };

        let context = RenderContext::new()
            .with_variable("PROJECT_NAME", &request.project_name)
            .with_variable("VERSION", request.label.as_str())
            .with_variable("PHASE", request.label.as_str())
            .with_variable("FROM_VERSION", from_version)
            .with_variable("DATE", today_string(self.clock.as_ref()))
            .with_variable(GIT_SUMMARY, report.to_markdown())
            .with_variable("DOCS_DIR", DOCS_DIR);
        let mut rendered = self.renderer.render(&template, &context)?;
        if !rendered.unresolved.is_empty() {
            warn!(unresolved = ?rendered.unresolved, "Changelog has unresolved placeholders");
        }
        if report != GitReport::NotRequested
            && !template.placeholders().iter().any(|p| p == GIT_SUMMARY)
        {
            debug!("Template has no {{{{GIT_SUMMARY}}}}; appending the git summary");
            append_block(&mut rendered.content, &report.to_markdown());
        }

        let path = request
            .output
            .clone()
            .unwrap_or_else(|| layout.changelog_path(&request.label));
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.filesystem.create_dir_all(parent)?;
        }

        let overwritten = self.filesystem.exists(&path);
        if overwritten {
            warn!(path = %path.display(), "Overwriting existing changelog");
        }
        self.filesystem.write_file(&path, &rendered.content)?;
        info!(path = %path.display(), "Changelog written");

        Ok(VersionOutcome {
            path,
            report,
            overwritten,
            unresolved: rendered.unresolved,
        })
    }

    fn load_template(&self, request: &VersionRequest) -> DocsResult<Template> {
        match &request.template {
            Some(path) => {
                if !self.filesystem.exists(path) {
                    return Err(ApplicationError::FileNotFound { path: path.clone() }.into());
                }
                let body = self.filesystem.read_to_string(path)?;
                Ok(Template::from_file(TemplateKind::Changelog, path, body))
            }
            None => self
                .store
                .get(TemplateKind::Changelog, DEFAULT_CHANGELOG, None),
        }
    }

    /// Summarize git history, degrading to `Unavailable` on any failure.
    fn git_report(&self, label: &VersionLabel, from: Option<&str>) -> GitReport {
        match self.summarize(label, from) {
            Ok(summary) => {
                debug!(range = %summary.range, commits = summary.commit_count, "Git summary");
                GitReport::Included(summary)
            }
            Err(e) => {
                warn!(error = %e, "Git analysis unavailable");
                GitReport::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Range end is the label when it names a commit (a tag), else `HEAD`.
    /// Range start is `from`, else the nearest tag before the end, else none.
    fn summarize(&self, label: &VersionLabel, from: Option<&str>) -> DocsResult<GitSummary> {
        let to = if self.vcs.resolves(label.as_str()) {
            label.to_string()
        } else {
            debug!(%label, "Label is not a revision; summarizing up to HEAD");
            "HEAD".to_string()
        };

        let from = match from {
            Some(from) => Some(from.to_string()),
            None => self.vcs.nearest_tag(&format!("{to}^"))?,
        };

        let range = GitRange::new(from, to);
        let commit_count = self.vcs.commit_count(&range)?;
        let diff_stat = self.vcs.diff_stat(&range)?;

        Ok(GitSummary {
            range,
            commit_count,
            diff_stat,
        })
    }
}

/// Append `block` after `content`, separated by one blank line.
fn append_block(content: &mut String, block: &str) {
    let trimmed = content.trim_end_matches('\n').len();
    content.truncate(trimmed);
    if !content.is_empty() {
        content.push_str("\n\n");
    }
    content.push_str(block);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appended_block_is_separated_by_blank_line() {
        let mut content = "Release v2.0\n".to_string();
        append_block(&mut content, "## Git Summary\n");
        assert_eq!(content, "Release v2.0\n\n## Git Summary\n");

        let mut empty = String::new();
        append_block(&mut empty, "x");
        assert_eq!(empty, "x");
    }
}
