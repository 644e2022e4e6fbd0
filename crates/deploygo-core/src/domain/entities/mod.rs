pub mod common;
pub mod file_set;
pub mod project_config;

pub use crate::domain::DomainError;
pub use file_set::{FileSet, FileTemplate};
pub use project_config::{ProjectConfig, ProjectConfigBuilder};
