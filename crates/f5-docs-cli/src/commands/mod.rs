//! Command handlers. Each one wires adapters into a core service, runs it and
//! reports through the [`OutputManager`](crate::output::OutputManager).

pub mod analyze;
pub mod completions;
pub mod config;
pub mod init;
pub mod templates;
pub mod version;

use std::path::{Path, PathBuf};

use f5_docs_adapters::LayeredTemplateStore;
use f5_docs_core::domain::DocsLayout;

use crate::config::AppConfig;

/// `{{PROJECT_NAME}}`: `project.name`, else the directory name.
pub(crate) fn project_name(config: &AppConfig, project_root: &Path) -> String {
    if let Some(name) = config.project.name.as_deref().filter(|n| !n.trim().is_empty()) {
        return name.to_string();
    }
    project_root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "project".to_string())
}

/// Template lookup order: `templates.dir`, then `.f5/templates/`, then built-ins.
pub(crate) fn template_store(config: &AppConfig, project_root: &Path) -> LayeredTemplateStore {
    let mut dirs: Vec<PathBuf> = Vec::new();
    if let Some(dir) = &config.templates.dir {
        dirs.push(project_root.join(dir));
    }
    dirs.push(DocsLayout::new(project_root).templates_dir());
    LayeredTemplateStore::new(dirs)
}

/// Shown to the user relative to the project root when possible.
pub(crate) fn display_path(path: &Path, project_root: &Path) -> String {
    path.strip_prefix(project_root)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_name_prefers_config() {
        let mut config = AppConfig::default();
        assert_eq!(project_name(&config, Path::new("/work/shop")), "shop");

        config.project.name = Some("Shop API".into());
        assert_eq!(project_name(&config, Path::new("/work/shop")), "Shop API");
    }

    #[test]
    fn configured_template_dir_is_searched_first() {
        let mut config = AppConfig::default();
        config.templates.dir = Some(PathBuf::from("docs-templates"));

        let store = template_store(&config, Path::new("/work/shop"));

        assert_eq!(
            store.dirs(),
            &[
                PathBuf::from("/work/shop/docs-templates"),
                PathBuf::from("/work/shop/.f5/templates"),
            ]
        );
    }

    #[test]
    fn display_path_is_relative() {
        assert_eq!(
            display_path(Path::new("/work/shop/.f5/docs"), Path::new("/work/shop")),
            ".f5/docs"
        );
    }
}
