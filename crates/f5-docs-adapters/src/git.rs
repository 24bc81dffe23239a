//! `git` subprocess adapter.
//!
//! Every query shells out to the `git` binary found on `PATH`, running in the
//! project directory. Failures surface as `ApplicationError::VersionControl`;
//! deciding what to do about them is the caller's job.

use std::path::PathBuf;
use std::process::{Command, Output};

use f5_docs_core::{
    application::{ApplicationError, ports::VersionControl},
    domain::GitRange,
    error::DocsResult,
};
use tracing::{debug, instrument};

/// [`VersionControl`] backed by the `git` CLI.
#[derive(Debug, Clone)]
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    fn output(&self, args: &[&str]) -> DocsResult<Output> {
        debug!(?args, dir = %self.workdir.display(), "running git");
        Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|e| failure(args, e.to_string()))
    }

    /// Run git and return trimmed stdout, failing on a non-zero exit.
    fn run(&self, args: &[&str]) -> DocsResult<String> {
        let output = self.output(args)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = match stderr.trim() {
                "" => format!("exited with {}", output.status),
                message => message.to_string(),
            };
            return Err(failure(args, reason));
        }
        String::from_utf8(output.stdout)
            .map(|text| text.trim().to_string())
            .map_err(|e| failure(args, e.to_string()))
    }

    /// Id of the empty tree in this repository's object format (SHA-1 or
    /// SHA-256). Diff base for a range with no start.
    fn empty_tree(&self) -> DocsResult<String> {
        // `output()` gives the child a closed stdin, so this hashes "".
        self.run(&["hash-object", "-t", "tree", "--stdin"])
    }
}

fn failure(args: &[&str], reason: String) -> f5_docs_core::error::DocsError {
    ApplicationError::VersionControl {
        command: args.first().copied().unwrap_or_default().to_string(),
        reason,
    }
    .into()
}

/// Refuse revisions git would parse as options.
fn checked_rev(rev: &str) -> DocsResult<&str> {
    if rev.is_empty() || rev.starts_with('-') {
        return Err(ApplicationError::VersionControl {
            command: "rev-parse".into(),
            reason: format!("invalid revision '{rev}'"),
        }
        .into());
    }
    Ok(rev)
}

impl VersionControl for GitCli {
    fn resolves(&self, rev: &str) -> bool {
        let Ok(rev) = checked_rev(rev) else {
            return false;
        };
        let spec = format!("{rev}^{{commit}}");
        self.output(&["rev-parse", "--verify", "--quiet", &spec])
            .map(|out| out.status.success())
            .unwrap_or(false)
    }

    #[instrument(skip(self))]
    fn nearest_tag(&self, rev: &str) -> DocsResult<Option<String>> {
        let rev = checked_rev(rev)?;
        let args = ["describe", "--tags", "--abbrev=0", rev];
        let output = self.output(&args)?;
        if !output.status.success() {
            // No tag reachable, or `rev` has no parent.
            return Ok(None);
        }
        let tag = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok((!tag.is_empty()).then_some(tag))
    }

    #[instrument(skip(self), fields(range = %range))]
    fn commit_count(&self, range: &GitRange) -> DocsResult<u64> {
        checked_rev(&range.to)?;
        if let Some(from) = &range.from {
            checked_rev(from)?;
        }
        let spec = range.rev_spec();
        let args = ["rev-list", "--count", spec.as_str()];
        let text = self.run(&args)?;
        text.parse::<u64>()
            .map_err(|e| failure(&args, format!("unexpected output '{text}': {e}")))
    }

    #[instrument(skip(self), fields(range = %range))]
    fn diff_stat(&self, range: &GitRange) -> DocsResult<String> {
        let to = checked_rev(&range.to)?;
        let from = match &range.from {
            Some(from) => checked_rev(from)?.to_string(),
            None => self.empty_tree()?,
        };
        self.run(&["diff", "--stat", &from, to])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn git_available() -> bool {
        Command::new("git")
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    fn git(dir: &Path, args: &[&str]) {
        let status = Command::new("git")
            .args(["-c", "user.name=Test", "-c", "user.email=test@example.com"])
            .args(["-c", "commit.gpgsign=false", "-c", "tag.gpgsign=false"])
            .args(args)
            .current_dir(dir)
            .output()
            .unwrap()
            .status;
        assert!(status.success(), "git {args:?} failed");
    }

    fn commit_file(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), format!("{name}\n")).unwrap();
        git(dir, &["add", name]);
        git(dir, &["commit", "-q", "-m", name]);
    }

    /// a (v1.0) -> b -> c (v2.0) -> d
    fn tagged_repo() -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path();
        git(dir, &["init", "-q"]);
        commit_file(dir, "a.txt");
        git(dir, &["tag", "v1.0"]);
        commit_file(dir, "b.txt");
        commit_file(dir, "c.txt");
        git(dir, &["tag", "v2.0"]);
        commit_file(dir, "d.txt");
        temp
    }

    #[test]
    fn counts_commits_between_tags() {
        if !git_available() {
            eprintln!("git not installed; skipping");
            return;
        }
        let repo = tagged_repo();
        let git = GitCli::new(repo.path());

        let range = GitRange::new(Some("v1.0".into()), "v2.0");
        assert_eq!(git.commit_count(&range).unwrap(), 2);

        let stat = git.diff_stat(&range).unwrap();
        assert!(stat.contains("b.txt"));
        assert!(stat.contains("c.txt"));
        assert!(!stat.contains("a.txt"));
    }

    #[test]
    fn resolves_tags_but_not_phase_names() {
        if !git_available() {
            eprintln!("git not installed; skipping");
            return;
        }
        let repo = tagged_repo();
        let git = GitCli::new(repo.path());

        assert!(git.resolves("v2.0"));
        assert!(git.resolves("HEAD"));
        assert!(!git.resolves("phase-3"));
        assert!(!git.resolves("--all"));
    }

    #[test]
    fn nearest_tag_walks_back_from_parent() {
        if !git_available() {
            eprintln!("git not installed; skipping");
            return;
        }
        let repo = tagged_repo();
        let git = GitCli::new(repo.path());

        assert_eq!(git.nearest_tag("v2.0^").unwrap().as_deref(), Some("v1.0"));
        assert_eq!(git.nearest_tag("HEAD").unwrap().as_deref(), Some("v2.0"));
        assert_eq!(git.nearest_tag("v1.0^").unwrap(), None);
    }

    #[test]
    fn whole_history_when_range_has_no_start() {
        if !git_available() {
            eprintln!("git not installed; skipping");
            return;
        }
        let repo = tagged_repo();
        let git = GitCli::new(repo.path());

        let range = GitRange::new(None, "v2.0");
        assert_eq!(git.commit_count(&range).unwrap(), 3);
        assert!(git.diff_stat(&range).unwrap().contains("a.txt"));
    }

    #[test]
    fn whole_history_in_sha256_repository() {
        if !git_available() {
            eprintln!("git not installed; skipping");
            return;
        }
        let temp = TempDir::new().unwrap();
        let dir = temp.path();
        let init = Command::new("git")
            .args(["init", "-q", "--object-format=sha256"])
            .current_dir(dir)
            .output()
            .unwrap();
        if !init.status.success() {
            eprintln!("git without sha256 support; skipping");
            return;
        }
        commit_file(dir, "a.txt");
        commit_file(dir, "b.txt");
        let git = GitCli::new(dir);

        assert_eq!(git.empty_tree().unwrap().len(), 64);
        let stat = git.diff_stat(&GitRange::new(None, "HEAD")).unwrap();
        assert!(stat.contains("a.txt"));
        assert!(stat.contains("b.txt"));
    }

    #[test]
    fn outside_a_repository_is_an_error() {
        if !git_available() {
            eprintln!("git not installed; skipping");
            return;
        }
        let temp = TempDir::new().unwrap();
        let git = GitCli::new(temp.path());

        let err = git
            .commit_count(&GitRange::new(None, "HEAD"))
            .unwrap_err();
        assert!(err.to_string().contains("git rev-list failed"));
    }

    #[test]
    fn option_like_revisions_are_rejected() {
        let git = GitCli::new(".");
        let err = git
            .commit_count(&GitRange::new(Some("--all".into()), "HEAD"))
            .unwrap_err();
        assert!(err.to_string().contains("invalid revision"));
    }
}
