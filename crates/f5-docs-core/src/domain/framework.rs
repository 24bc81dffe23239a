//! Framework and documentation-language value objects.
//!
//! These are pure value types: `Copy`, equality-by-value, no identity. Marker
//! files and detection order live in `detection.rs`; this file only defines
//! the types, their string forms, and their `FromStr` parsers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── Framework ────────────────────────────────────────────────────────────────

/// A project type `f5 docs analyze` knows how to prompt for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    Laravel,
    #[serde(rename = "nestjs")]
    NestJs,
    Django,
    Spring,
    Go,
    Generic,
}

impl Framework {
    pub const ALL: [Framework; 6] = [
        Self::Laravel,
        Self::NestJs,
        Self::Django,
        Self::Spring,
        Self::Go,
        Self::Generic,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Laravel => "laravel",
            Self::NestJs => "nestjs",
            Self::Django => "django",
            Self::Spring => "spring",
            Self::Go => "go",
            Self::Generic => "generic",
        }
    }

    /// Human-facing name used inside rendered prompts.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Laravel => "Laravel",
            Self::NestJs => "NestJS",
            Self::Django => "Django",
            Self::Spring => "Spring Boot",
            Self::Go => "Go",
            Self::Generic => "Generic",
        }
    }

    /// Name of the prompt template bundled for this framework.
    pub const fn prompt_name(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "laravel" => Ok(Self::Laravel),
            "nestjs" | "nest" => Ok(Self::NestJs),
            "django" => Ok(Self::Django),
            "spring" | "spring-boot" | "springboot" | "java" => Ok(Self::Spring),
            "go" | "golang" => Ok(Self::Go),
            "generic" | "other" => Ok(Self::Generic),
            _ => Err(DomainError::UnknownFramework { value: s.into() }),
        }
    }
}

// ── DocLanguage ──────────────────────────────────────────────────────────────

/// Language the generated documentation is written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocLanguage {
    #[default]
    En,
    Vi,
    Ja,
}

impl DocLanguage {
    pub const ALL: [DocLanguage; 3] = [Self::En, Self::Vi, Self::Ja];

    pub const fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Vi => "vi",
            Self::Ja => "ja",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Vi => "Tiếng Việt",
            Self::Ja => "日本語",
        }
    }
}

impl fmt::Display for DocLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DocLanguage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "vi" | "vietnamese" => Ok(Self::Vi),
            "ja" | "jp" | "japanese" => Ok(Self::Ja),
            _ => Err(DomainError::UnknownLanguage { value: s.into() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framework_parses_canonical_names() {
        for fw in Framework::ALL {
            assert_eq!(Framework::from_str(fw.as_str()).unwrap(), fw);
        }
    }

    #[test]
    fn framework_parsing_is_case_insensitive_with_aliases() {
        assert_eq!(Framework::from_str("NestJS").unwrap(), Framework::NestJs);
        assert_eq!(Framework::from_str("golang").unwrap(), Framework::Go);
        assert_eq!(Framework::from_str("Spring-Boot").unwrap(), Framework::Spring);
    }

    #[test]
    fn unknown_framework_is_error() {
        assert!(matches!(
            Framework::from_str("rails"),
            Err(DomainError::UnknownFramework { .. })
        ));
    }

    #[test]
    fn framework_serializes_lowercase() {
        let json = serde_json::to_string(&Framework::NestJs).unwrap();
        assert_eq!(json, "\"nestjs\"");
    }

    #[test]
    fn language_codes() {
        assert_eq!(DocLanguage::from_str("JA").unwrap(), DocLanguage::Ja);
        assert_eq!(DocLanguage::default().code(), "en");
        assert!(DocLanguage::from_str("fr").is_err());
    }
}
