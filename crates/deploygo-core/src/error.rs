//! Unified error handling for DeployGo Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for DeployGo Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DeployError {
    /// Errors from the domain layer (invalid configuration, unknown family).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem, rendering).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl DeployError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in DeployGo".into(),
                "Please report this issue at: https://github.com/C9b3rD3vi1/deploygo/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Whether the write engine may absorb this error locally.
    ///
    /// Only template execution failures qualify: under the lenient render
    /// policy they degrade to writing the raw template text.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::TemplateExecutionFailed { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    /// The request collides with existing state (e.g. the target exists).
    Conflict,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type DeployResult<T> = Result<T, DeployError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn domain_errors_keep_their_category() {
        let err: DeployError = DomainError::UnsupportedTemplate {
            selector: "java".into(),
            available: vec!["go"],
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(err.to_string(), "Unsupported template 'java'");
    }

    #[test]
    fn only_template_failures_are_recoverable() {
        let template: DeployError = ApplicationError::TemplateExecutionFailed {
            template: "main.go".into(),
            reason: "unclosed block".into(),
        }
        .into();
        let exists: DeployError = ApplicationError::AlreadyExists {
            path: PathBuf::from("demo"),
        }
        .into();

        assert!(template.is_recoverable());
        assert!(!exists.is_recoverable());
    }
}
