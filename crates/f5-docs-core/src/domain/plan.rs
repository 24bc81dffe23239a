//! What `f5 docs analyze` intends to do, before any prompt is rendered.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::Framework;

/// Module/entity filters narrowing the analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Scope {
    pub modules: Vec<String>,
    pub entities: Vec<String>,
}

impl Scope {
    pub fn new(modules: Vec<String>, entities: Vec<String>) -> Self {
        Self { modules, entities }
    }

    pub fn is_everything(&self) -> bool {
        self.modules.is_empty() && self.entities.is_empty()
    }

    /// One-line description used for `{{SCOPE}}`.
    pub fn describe(&self) -> String {
        if self.is_everything() {
            return "the entire codebase".to_string();
        }
        let mut parts = Vec::new();
        if !self.modules.is_empty() {
            parts.push(format!("modules: {}", self.modules.join(", ")));
        }
        if !self.entities.is_empty() {
            parts.push(format!("entities: {}", self.entities.join(", ")));
        }
        parts.join("; ")
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// How the framework was decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "by", content = "marker", rename_all = "snake_case")]
pub enum DetectedBy {
    /// `--framework` was given.
    Override,
    /// A marker file matched.
    Marker(String),
    /// No marker matched.
    Fallback,
}

impl fmt::Display for DetectedBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Override => f.write_str("--framework override"),
            Self::Marker(marker) => write!(f, "marker file '{marker}'"),
            Self::Fallback => f.write_str("no marker found"),
        }
    }
}

/// Which prompt the analysis will render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PromptSource {
    /// Named prompt looked up in the template store.
    Template(String),
    /// Explicit `--prompt <FILE>`.
    File(PathBuf),
}

impl fmt::Display for PromptSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(name) => write!(f, "prompts/{name}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// The detection/plan summary printed by `--dry-run`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisPlan {
    pub project_name: String,
    pub project_root: PathBuf,
    pub framework: Framework,
    pub detected_by: DetectedBy,
    /// Other markers present in a polyglot repository.
    pub also_matched: Vec<String>,
    pub scope: Scope,
    pub output_dir: PathBuf,
    pub prompt: PromptSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_scope_covers_everything() {
        let scope = Scope::default();
        assert!(scope.is_everything());
        assert_eq!(scope.describe(), "the entire codebase");
    }

    #[test]
    fn scope_lists_filters() {
        let scope = Scope::new(vec!["auth".into(), "billing".into()], vec!["User".into()]);
        assert_eq!(scope.describe(), "modules: auth, billing; entities: User");
    }

    #[test]
    fn plan_serializes_to_json() {
        let plan = AnalysisPlan {
            project_name: "shop".into(),
            project_root: PathBuf::from("/work/shop"),
            framework: Framework::Laravel,
            detected_by: DetectedBy::Marker("artisan".into()),
            also_matched: vec![],
            scope: Scope::default(),
            output_dir: PathBuf::from(".f5/docs"),
            prompt: PromptSource::Template("laravel".into()),
        };
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["framework"], "laravel");
        assert_eq!(json["detected_by"]["by"], "marker");
        assert_eq!(json["detected_by"]["marker"], "artisan");
        assert_eq!(json["prompt"]["value"], "laravel");
    }
}
