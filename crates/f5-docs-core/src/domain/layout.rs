//! On-disk layout of the documentation workspace.

use std::path::{Path, PathBuf};

use crate::domain::{TemplateKind, VersionLabel};

pub const F5_DIR: &str = ".f5";
pub const DOCS_DIR: &str = ".f5/docs";
pub const TEMPLATES_DIR: &str = ".f5/templates";
pub const CONFIG_FILE: &str = ".f5/config.toml";
pub const README_FILE: &str = "README.md";

/// Sections created by `f5 docs init`, in creation order.
pub const SECTIONS: [&str; 5] = ["entities", "modules", "api", "screens", "versions"];

/// Paths of the `.f5/docs/` tree for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsLayout {
    project_root: PathBuf,
}

impl DocsLayout {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// `<project>/.f5/docs`
    pub fn root(&self) -> PathBuf {
        self.project_root.join(DOCS_DIR)
    }

    pub fn section_dirs(&self) -> Vec<PathBuf> {
        let root = self.root();
        SECTIONS.iter().map(|s| root.join(s)).collect()
    }

    pub fn readme_path(&self) -> PathBuf {
        self.root().join(README_FILE)
    }

    pub fn versions_dir(&self) -> PathBuf {
        self.root().join("versions")
    }

    pub fn changelog_path(&self, label: &VersionLabel) -> PathBuf {
        self.versions_dir().join(format!("{}.md", label.as_str()))
    }

    /// `<project>/.f5/templates`, the project-local override directory.
    pub fn templates_dir(&self) -> PathBuf {
        self.project_root.join(TEMPLATES_DIR)
    }

    pub fn template_dir(&self, kind: TemplateKind) -> PathBuf {
        self.templates_dir().join(kind.dir_name())
    }

    pub fn config_path(&self) -> PathBuf {
        self.project_root.join(CONFIG_FILE)
    }

    /// A marker file at the project root, as probed by detection.
    pub fn marker_path(&self, marker: &str) -> PathBuf {
        self.project_root.join(marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_live_under_docs_root() {
        let layout = DocsLayout::new("/work/app");
        let dirs = layout.section_dirs();
        assert_eq!(dirs.len(), 5);
        assert_eq!(dirs[0], PathBuf::from("/work/app/.f5/docs/entities"));
        assert_eq!(dirs[4], PathBuf::from("/work/app/.f5/docs/versions"));
    }

    #[test]
    fn changelog_is_named_after_label() {
        let layout = DocsLayout::new("app");
        let label = VersionLabel::parse("v2.0").unwrap();
        assert_eq!(
            layout.changelog_path(&label),
            PathBuf::from("app/.f5/docs/versions/v2.0.md")
        );
    }

    #[test]
    fn template_override_dirs() {
        let layout = DocsLayout::new("app");
        assert_eq!(
            layout.template_dir(TemplateKind::Prompt),
            PathBuf::from("app/.f5/templates/prompts")
        );
    }
}
