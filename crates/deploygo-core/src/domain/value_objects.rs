//! Domain value objects: Language, ProjectName, Port, Version.
//!
//! # Design
//!
//! These are pure value types: equality-by-value, no identity. Each one
//! validates on construction, so a value that exists is a value that is
//! safe to substitute into generated files and to use as a directory name.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Language ─────────────────────────────────────────────────────────────────

/// A runtime a generated project targets.
///
/// To add a language: add a variant here, then a matching
/// `TemplateFamily` in `families/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Go,
    NodeJs,
    Python,
}

impl Language {
    pub const ALL: [Language; 3] = [Self::Go, Self::NodeJs, Self::Python];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::NodeJs => "nodejs",
            Self::Python => "python",
        }
    }

    /// Human-facing runtime name.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Go => "Go",
            Self::NodeJs => "Node.js",
            Self::Python => "Python",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "go" | "golang" => Ok(Self::Go),
            "nodejs" | "node" | "js" => Ok(Self::NodeJs),
            "python" | "py" => Ok(Self::Python),
            other => Err(DomainError::UnknownLanguage {
                value: other.to_string(),
            }),
        }
    }
}

// ── ProjectName ──────────────────────────────────────────────────────────────

/// Name of the generated project.
///
/// Doubles as the output directory name, so it must be a single, non-hidden
/// path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let invalid = |reason: &str| DomainError::InvalidProjectName {
            name: name.clone(),
            reason: reason.into(),
        };

        if name.trim().is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if name.starts_with('.') {
            return Err(invalid("name cannot start with '.'"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(invalid("name cannot contain path separators"));
        }
        if name.chars().any(char::is_control) {
            return Err(invalid("name cannot contain control characters"));
        }
        // Names are substituted into templates; braces would corrupt them.
        if name.contains('{') || name.contains('}') {
            return Err(invalid("name cannot contain '{' or '}'"));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercase, whitespace-free form for package and module identifiers.
    pub fn slug(&self) -> String {
        self.0
            .trim()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_ascii_lowercase()
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── Port ─────────────────────────────────────────────────────────────────────

/// A TCP port the generated service listens on. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Port(u16);

impl Port {
    pub const DEFAULT: Port = Port(8080);

    pub fn new(value: u16) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::InvalidPort {
                value: value.to_string(),
                reason: "port must be non-zero".into(),
            });
        }
        Ok(Self(value))
    }

    pub const fn get(&self) -> u16 {
        self.0
    }
}

impl Default for Port {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Port {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<u16>().map_err(|e| DomainError::InvalidPort {
            value: s.to_string(),
            reason: e.to_string(),
        })?;
        Self::new(value)
    }
}

// ── Version ──────────────────────────────────────────────────────────────────

/// Version tag stamped into manifests and image tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Version(String);

impl Version {
    pub const INITIAL: &'static str = "1.0.0";

    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::InvalidVersion {
                value,
                reason: "version cannot be empty".into(),
            });
        }
        if value.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidVersion {
                value,
                reason: "version cannot contain whitespace".into(),
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Version {
    fn default() -> Self {
        Self(Self::INITIAL.to_string())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
