use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to carry through reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Invalid port '{value}': {reason}")]
    InvalidPort { value: String, reason: String },

    #[error("Invalid version '{value}': {reason}")]
    InvalidVersion { value: String, reason: String },

    #[error("Unknown language '{value}'")]
    UnknownLanguage { value: String },

    #[error("Invalid output path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Duplicate path in file set: {path}")]
    DuplicatePath { path: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Unsupported template '{selector}'")]
    UnsupportedTemplate {
        selector: String,
        available: Vec<&'static str>,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, .. } => vec![
                format!("'{name}' cannot be used as a directory name"),
                "Use letters, digits, hyphens, and underscores".into(),
                "Examples: demo, payments-api, user_service".into(),
            ],
            Self::InvalidPort { .. } => vec![
                "Ports must be between 1 and 65535".into(),
                "Example: deploygo init demo --port 9090".into(),
            ],
            Self::UnknownLanguage { .. } => vec![
                "Supported languages: go, nodejs, python".into(),
                "Omit --language to follow the selected template".into(),
            ],
            Self::UnsupportedTemplate { available, .. } => {
                let mut suggestions = vec!["Available templates:".to_string()];
                suggestions.extend(available.iter().map(|name| format!("  • {name}")));
                suggestions.push("Try: deploygo list".into());
                suggestions
            }
            _ => vec!["See `deploygo --help` for details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsupportedTemplate { .. } => ErrorCategory::NotFound,
            Self::DuplicatePath { .. } => ErrorCategory::Internal,
            _ => ErrorCategory::Validation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_template_lists_available_families() {
        let err = DomainError::UnsupportedTemplate {
            selector: "java".into(),
            available: vec!["go", "nodejs", "python"],
        };
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("nodejs")));
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn validation_errors_are_categorised() {
        let err = DomainError::InvalidPort {
            value: "0".into(),
            reason: "port must be non-zero".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.to_string(), "Invalid port '0': port must be non-zero");
    }
}
