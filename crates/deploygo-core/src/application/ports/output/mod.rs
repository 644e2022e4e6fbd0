//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `deploygo-adapters` crate provides implementations.

use std::io::Write;
use std::path::Path;

use crate::domain::ProjectConfig;
use crate::error::DeployResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `deploygo_adapters::filesystem::LocalFilesystem` (production)
/// - `deploygo_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Each method reports failures with the matching `ApplicationError`
/// kind, so callers can propagate them unchanged.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    ///
    /// Fails with `DirectoryCreateFailed`.
    fn create_dir_all(&self, path: &Path) -> DeployResult<()>;

    /// Remove a path and everything below it.
    ///
    /// Fails with `RemovalFailed`. A failure may leave the path partially
    /// removed.
    fn remove_all(&self, path: &Path) -> DeployResult<()>;

    /// Create (or truncate) a file and open it for writing.
    ///
    /// Fails with `FileCreateFailed`. The handle is released on drop.
    fn create_file(&self, path: &Path) -> DeployResult<Box<dyn Write>>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `deploygo_adapters::renderer::HandlebarsRenderer`
pub trait TemplateRenderer: Send + Sync {
    /// Substitute `config` into `template`.
    ///
    /// # Arguments
    ///
    /// * `name` - Template name used in diagnostics (the relative path)
    /// * `template` - Raw template text
    /// * `config` - Values for `project_name`, `language`, `port`, `version`
    ///
    /// Fails with `TemplateExecutionFailed` when the text cannot be parsed
    /// or rendered.
    fn render(&self, name: &str, template: &str, config: &ProjectConfig) -> DeployResult<String>;
}

/// Port for user-facing progress while files are written.
///
/// Called once per file, after its content has been written.
pub trait ProgressReporter {
    fn file_created(&self, path: &Path);
}
