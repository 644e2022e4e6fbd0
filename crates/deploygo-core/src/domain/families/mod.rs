//! Template family registry.
//!
//! # Design
//!
//! A family is a named file-set builder. The set of families is closed and
//! known at compile time: [`FAMILY_REGISTRY`] holds exactly one
//! [`FamilyDef`] per [`TemplateFamily`] variant, and every lookup is a
//! table scan over it.
//!
//! # Adding a New Family
//!
//! 1. Add a variant to [`TemplateFamily`]
//! 2. Write a `build(&ProjectConfig) -> FileSet` function in a new module
//! 3. Add one [`FamilyDef`] entry to [`FAMILY_REGISTRY`]

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::{
    entities::{file_set::FileSet, project_config::ProjectConfig},
    error::DomainError,
    value_objects::Language,
};

mod go;
mod nodejs;
mod python;
pub mod shared;

/// Signature every family builder implements.
///
/// Builders are pure: no I/O, no clock, no environment.
pub type BuildFn = fn(&ProjectConfig) -> FileSet;

/// A supported template family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateFamily {
    Go,
    NodeJs,
    Python,
}

/// Everything the engine needs to know about one family.
#[derive(Debug, Clone, Copy)]
pub struct FamilyDef {
    pub family: TemplateFamily,
    /// Selector accepted on the command line.
    pub selector: &'static str,
    /// Language stamped into the project when none is given.
    pub language: Language,
    pub description: &'static str,
    pub build: BuildFn,
}

/// Single source of truth for the supported families.
pub static FAMILY_REGISTRY: &[FamilyDef] = &[
    FamilyDef {
        family: TemplateFamily::Go,
        selector: "go",
        language: Language::Go,
        description: "Go net/http service on a multi-stage alpine image",
        build: go::build,
    },
    FamilyDef {
        family: TemplateFamily::NodeJs,
        selector: "nodejs",
        language: Language::NodeJs,
        description: "Node.js Express service on node:18-alpine",
        build: nodejs::build,
    },
    FamilyDef {
        family: TemplateFamily::Python,
        selector: "python",
        language: Language::Python,
        description: "Python Flask service served by gunicorn",
        build: python::build,
    },
];

impl TemplateFamily {
    pub const ALL: [TemplateFamily; 3] = [Self::Go, Self::NodeJs, Self::Python];

    /// Resolve a selector such as `"go"` to its family.
    ///
    /// Matching ignores case and surrounding whitespace.
    pub fn from_selector(selector: &str) -> Result<Self, DomainError> {
        let wanted = selector.trim().to_ascii_lowercase();
        FAMILY_REGISTRY
            .iter()
            .find(|def| def.selector == wanted)
            .map(|def| def.family)
            .ok_or_else(|| DomainError::UnsupportedTemplate {
                selector: selector.to_string(),
                available: Self::selectors(),
            })
    }

    /// All registered selectors, in registry order.
    pub fn selectors() -> Vec<&'static str> {
        FAMILY_REGISTRY.iter().map(|def| def.selector).collect()
    }

    /// Registry entry for this family. Entries are stored in variant order.
    pub fn def(self) -> &'static FamilyDef {
        let index = match self {
            Self::Go => 0,
            Self::NodeJs => 1,
            Self::Python => 2,
        };
        &FAMILY_REGISTRY[index]
    }

    pub fn selector(self) -> &'static str {
        self.def().selector
    }

    pub fn language(self) -> Language {
        self.def().language
    }

    pub fn description(self) -> &'static str {
        self.def().description
    }

    /// Produce this family's complete file set for `config`.
    pub fn build_file_set(self, config: &ProjectConfig) -> FileSet {
        (self.def().build)(config)
    }
}

impl fmt::Display for TemplateFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

impl FromStr for TemplateFamily {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_selector(s)
    }
}
