//! Markdown templates and placeholder substitution.
//!
//! A template is an opaque markdown string with `{{NAME}}` placeholders. There
//! are no conditionals, loops or filters: rendering is a single left-to-right
//! scan that replaces known names and leaves everything else untouched.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::{DocLanguage, DomainError};

// ── TemplateKind ─────────────────────────────────────────────────────────────

/// The three families of templates the docs commands consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    /// `.f5/docs/README.md` written by `init`.
    Readme,
    /// AI prompts printed by `analyze`, one per framework.
    Prompt,
    /// Changelogs written by `version`.
    Changelog,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [Self::Readme, Self::Prompt, Self::Changelog];

    /// Directory holding this kind inside a template root.
    pub const fn dir_name(&self) -> &'static str {
        match self {
            Self::Readme => "readme",
            Self::Prompt => "prompts",
            Self::Changelog => "changelog",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for TemplateKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "readme" => Ok(Self::Readme),
            "prompt" | "prompts" => Ok(Self::Prompt),
            "changelog" | "changelogs" => Ok(Self::Changelog),
            _ => Err(DomainError::UnknownTemplateKind { value: s.into() }),
        }
    }
}

// ── Template ─────────────────────────────────────────────────────────────────

/// Where a template body came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "path", rename_all = "lowercase")]
pub enum TemplateOrigin {
    /// Compiled into the binary.
    Builtin,
    /// Read from disk (override directory or an explicit `--prompt`/`--template`).
    File(PathBuf),
}

impl fmt::Display for TemplateOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => f.write_str("builtin"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A loaded template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub kind: TemplateKind,
    pub name: String,
    /// `None` for language-neutral templates.
    pub language: Option<DocLanguage>,
    pub body: String,
    pub origin: TemplateOrigin,
}

impl Template {
    pub fn builtin(
        kind: TemplateKind,
        name: impl Into<String>,
        language: Option<DocLanguage>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            language,
            body: body.into(),
            origin: TemplateOrigin::Builtin,
        }
    }

    /// A template read from a user-supplied file.
    pub fn from_file(kind: TemplateKind, path: impl Into<PathBuf>, body: impl Into<String>) -> Self {
        let path = path.into();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "custom".to_string());
        Self {
            kind,
            name,
            language: None,
            body: body.into(),
            origin: TemplateOrigin::File(path),
        }
    }

    /// Placeholders the template references, sorted and deduplicated.
    pub fn placeholders(&self) -> Vec<String> {
        placeholders_in(&self.body)
    }
}

/// Validate a template name before it is turned into a file path.
pub fn validate_template_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidTemplateName {
        name: name.into(),
        reason: reason.into(),
    };
    if name.is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(invalid("only letters, digits, '-' and '_' are allowed"));
    }
    Ok(())
}

// ── RenderContext ────────────────────────────────────────────────────────────

/// Placeholder values for one render.
///
/// Names are `SCREAMING_SNAKE_CASE` by convention. A `BTreeMap` keeps debug
/// output and JSON dumps stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Replace every `{{NAME}}` that has a value.
    ///
    /// - `{{UNKNOWN}}` stays as the literal `{{UNKNOWN}}`.
    /// - `{{{NAME}}}` keeps the outer braces: `{value}`.
    /// - Substituted values are not rescanned, so a value containing
    ///   `{{DATE}}` is emitted verbatim.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];
            match after_open.find("}}") {
                Some(_) if after_open.starts_with('{') => {
                    // `{{{NAME}}}`: keep the outer brace, substitute the inner token.
                    out.push('{');
                    rest = &rest[start + 1..];
                }
                Some(end) if is_placeholder_name(after_open[..end].trim()) => {
                    let name = &after_open[..end];
                    match self.variables.get(name.trim()) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push_str("{{");
                            out.push_str(name);
                            out.push_str("}}");
                        }
                    }
                    rest = &after_open[end + 2..];
                }
                Some(_) => {
                    // Stray `{{`: copy it and rescan right after it.
                    out.push_str("{{");
                    rest = after_open;
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }

    /// Placeholders in `text` this context has no value for.
    pub fn unresolved(&self, text: &str) -> Vec<String> {
        placeholders_in(text)
            .into_iter()
            .filter(|name| !self.variables.contains_key(name))
            .collect()
    }
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Every `{{NAME}}` token in `text`, sorted and deduplicated.
pub fn placeholders_in(text: &str) -> Vec<String> {
    let mut found = std::collections::BTreeSet::new();
    let mut rest = text;
    while let Some(start) = rest.find("{{") {
        let after_open = &rest[start + 2..];
        if after_open.starts_with('{') {
            rest = &rest[start + 1..];
            continue;
        }
        let Some(end) = after_open.find("}}") else {
            break;
        };
        let name = after_open[..end].trim();
        if !is_placeholder_name(name) {
            rest = after_open;
            continue;
        }
        found.insert(name.to_string());
        rest = &after_open[end + 2..];
    }
    found.into_iter().collect()
}
