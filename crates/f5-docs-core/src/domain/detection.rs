//! Marker-file framework detection.
//!
//! A single ordered table maps marker files to frameworks. Detection walks the
//! table top to bottom and the first marker present wins; when nothing matches
//! the project is [`Framework::Generic`].
//!
//! The order matters for polyglot repositories (a Laravel app that also ships
//! a `go.mod` for a sidecar is still Laravel). Changing it changes what users
//! get, so new rules are appended, never inserted.

use serde::Serialize;

use crate::domain::Framework;

/// One marker file and the framework it signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerRule {
    /// File name relative to the project root.
    pub marker: &'static str,
    pub framework: Framework,
}

/// Detection order. First match wins.
pub static DETECTION_RULES: &[MarkerRule] = &[
    MarkerRule {
        marker: "artisan",
        framework: Framework::Laravel,
    },
    MarkerRule {
        marker: "nest-cli.json",
        framework: Framework::NestJs,
    },
    MarkerRule {
        marker: "manage.py",
        framework: Framework::Django,
    },
    MarkerRule {
        marker: "pom.xml",
        framework: Framework::Spring,
    },
    MarkerRule {
        marker: "go.mod",
        framework: Framework::Go,
    },
];

/// Result of running the detection rules against a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub framework: Framework,
    /// Marker that decided the framework; `None` for the generic fallback.
    pub marker: Option<&'static str>,
    /// Markers present after the winning one.
    pub also_matched: Vec<&'static str>,
}

impl Detection {
    pub fn is_ambiguous(&self) -> bool {
        !self.also_matched.is_empty()
    }
}

/// Run [`DETECTION_RULES`] using `present` to test whether a marker exists.
///
/// The probe keeps this function free of I/O; callers pass a closure backed
/// by whatever filesystem they have.
pub fn detect(mut present: impl FnMut(&str) -> bool) -> Detection {
    let hits: Vec<&MarkerRule> = DETECTION_RULES
        .iter()
        .filter(|rule| present(rule.marker))
        .collect();

    match hits.split_first() {
        Some((first, rest)) => Detection {
            framework: first.framework,
            marker: Some(first.marker),
            also_matched: rest.iter().map(|r| r.marker).collect(),
        },
        None => Detection {
            framework: Framework::Generic,
            marker: None,
            also_matched: Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_markers(markers: &'static [&'static str]) -> impl FnMut(&str) -> bool {
        move |m| markers.iter().any(|present| *present == m)
    }

    #[test]
    fn artisan_is_laravel() {
        let d = detect(with_markers(&["artisan"]));
        assert_eq!(d.framework, Framework::Laravel);
        assert_eq!(d.marker, Some("artisan"));
    }

    #[test]
    fn nest_cli_is_nestjs() {
        assert_eq!(
            detect(with_markers(&["nest-cli.json"])).framework,
            Framework::NestJs
        );
    }

    #[test]
    fn remaining_markers() {
        assert_eq!(detect(with_markers(&["manage.py"])).framework, Framework::Django);
        assert_eq!(detect(with_markers(&["pom.xml"])).framework, Framework::Spring);
        assert_eq!(detect(with_markers(&["go.mod"])).framework, Framework::Go);
    }

    #[test]
    fn no_marker_is_generic() {
        let d = detect(|_| false);
        assert_eq!(d.framework, Framework::Generic);
        assert_eq!(d.marker, None);
        assert!(!d.is_ambiguous());
    }

    #[test]
    fn polyglot_keeps_first_match() {
        let d = detect(with_markers(&["go.mod", "artisan"]));
        assert_eq!(d.framework, Framework::Laravel);
        assert_eq!(d.also_matched, vec!["go.mod"]);
        assert!(d.is_ambiguous());
    }

    #[test]
    fn every_rule_probes_once() {
        let mut probed = Vec::new();
        detect(|m| {
            probed.push(m.to_string());
            false
        });
        let expected: Vec<String> = DETECTION_RULES.iter().map(|r| r.marker.into()).collect();
        assert_eq!(probed, expected);
    }
}
