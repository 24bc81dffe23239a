//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `F5_<SECTION>__<KEY>`, e.g. `F5_DOCS__LANGUAGE=vi`
//! 3. `--config <FILE>` (must exist when given)
//! 4. Project file: `.f5/config.toml`
//! 5. Global file: `<config dir>/f5/config.toml`
//! 6. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use f5_docs_core::domain::layout::CONFIG_FILE;

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub project: ProjectConfig,
    pub docs: DocsConfig,
    pub templates: TemplatesConfig,
    pub git: GitConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// `{{PROJECT_NAME}}`. Falls back to the project directory name.
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Default for `docs init --lang`.
    pub language: String,
    /// Default for `docs init --template`.
    pub template: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            language: "en".into(),
            template: "default".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Extra override directory, searched before `.f5/templates/`.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Turn on `--git-analysis` for every `docs version`.
    pub analysis: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

/// Keys accepted by `f5 config get`.
pub const KEYS: [&str; 7] = [
    "project.name",
    "docs.language",
    "docs.template",
    "templates.dir",
    "git.analysis",
    "output.no_color",
    "output.format",
];

impl AppConfig {
    /// Merge every configuration layer for a project rooted at `project_root`.
    pub fn load(explicit: Option<&Path>, project_root: &Path) -> anyhow::Result<Self> {
        let mut builder = Config::builder();

        if let Some(global) = Self::global_config_path() {
            debug!(path = %global.display(), "global config layer");
            builder = builder.add_source(File::from(global).required(false));
        }

        let project = Self::project_config_path(project_root);
        debug!(path = %project.display(), "project config layer");
        builder = builder.add_source(File::from(project).required(false));

        if let Some(path) = explicit {
            debug!(path = %path.display(), "explicit config layer");
            builder = builder.add_source(File::from(path.to_path_buf()).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("F5")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// `<config dir>/f5/config.toml`, via `directories::ProjectDirs`.
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "f5", "f5")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn project_config_path(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_FILE)
    }

    /// Effective value of a dotted key, or `None` for an unknown key.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "project.name" => self.project.name.clone().unwrap_or_default(),
            "docs.language" => self.docs.language.clone(),
            "docs.template" => self.docs.template.clone(),
            "templates.dir" => self
                .templates
                .dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            "git.analysis" => self.git.analysis.to_string(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.clone(),
            _ => return None,
        };
        Some(value)
    }
}
