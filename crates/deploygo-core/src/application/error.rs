//! Application layer errors.
//!
//! These errors represent failures while materializing a project, not
//! invalid input. Invalid input is `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while preparing the target and writing files.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Target directory is present and overwrite was not authorized.
    #[error("Directory '{}' already exists", .path.display())]
    AlreadyExists { path: PathBuf },

    /// A pre-existing target could not be cleared for overwrite.
    #[error("Failed to remove existing directory '{}': {reason}", .path.display())]
    RemovalFailed { path: PathBuf, reason: String },

    /// The target or an intermediate directory could not be created.
    #[error("Failed to create directory '{}': {reason}", .path.display())]
    DirectoryCreateFailed { path: PathBuf, reason: String },

    /// A destination file could not be opened for writing.
    #[error("Failed to create file '{}': {reason}", .path.display())]
    FileCreateFailed { path: PathBuf, reason: String },

    /// Content could not be written to an opened file.
    #[error("Failed to write file '{}': {reason}", .path.display())]
    FileWriteFailed { path: PathBuf, reason: String },

    /// Template text could not be parsed or rendered.
    #[error("Template '{template}' could not be rendered: {reason}")]
    TemplateExecutionFailed { template: String, reason: String },

    /// Shared adapter state was poisoned by a panic in another thread.
    #[error("Filesystem state is unavailable")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AlreadyExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --overwrite to replace it (destructive)".into(),
                "Choose a different project name".into(),
            ],
            Self::RemovalFailed { path, .. } => vec![
                format!("Could not clear: {}", path.display()),
                "Check that you own every file inside it".into(),
                "The directory may now be partially removed".into(),
            ],
            Self::DirectoryCreateFailed { path, .. }
            | Self::FileCreateFailed { path, .. }
            | Self::FileWriteFailed { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files created before the failure were left in place".into(),
            ],
            Self::TemplateExecutionFailed { template, .. } => vec![
                format!("Template '{template}' is malformed"),
                "Run without --strict-templates to write it unrendered".into(),
            ],
            Self::LockPoisoned => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AlreadyExists { .. } => ErrorCategory::Conflict,
            Self::TemplateExecutionFailed { .. } => ErrorCategory::Validation,
            Self::RemovalFailed { .. }
            | Self::DirectoryCreateFailed { .. }
            | Self::FileCreateFailed { .. }
            | Self::FileWriteFailed { .. }
            | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
