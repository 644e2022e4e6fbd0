//! Application layer for DeployGo.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, TemplateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer: it decides the
//! order of filesystem operations and how failures propagate, while the
//! file contents themselves come from `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    RenderPolicy, ScaffoldReport, ScaffoldRequest, ScaffoldService, TemplateInfo,
    TemplateService, WrittenFile,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ProgressReporter, TemplateRenderer};

pub use error::ApplicationError;
