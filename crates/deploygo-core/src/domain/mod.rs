//! Core domain layer for DeployGo.
//!
//! Pure data and rules: what a project configuration is, which template
//! families exist, and which files each family produces. Nothing in here
//! touches the filesystem or renders templates; that happens behind the
//! ports in `crate::application`.

pub mod entities;
pub mod error;
pub mod families;
pub mod value_objects;

pub use entities::{
    common::RelativePath,
    file_set::{FileSet, FileTemplate},
    project_config::{ProjectConfig, ProjectConfigBuilder},
};

pub use error::DomainError;

pub use families::{FAMILY_REGISTRY, FamilyDef, TemplateFamily};

pub use value_objects::{Language, Port, ProjectName, Version};
