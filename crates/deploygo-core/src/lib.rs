//! DeployGo Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the DeployGo
//! project scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          deploygo-cli (CLI)             │
//! │   (builds ProjectConfig, reports)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ScaffoldService, TemplateService)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateRenderer, Progress)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    deploygo-adapters (Infrastructure)   │
//! │ (LocalFilesystem, HandlebarsRenderer)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectConfig, TemplateFamily, FileSet)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use deploygo_core::prelude::*;
//!
//! // 1. Describe the project
//! let config = ProjectConfig::builder()
//!     .project_name("demo")
//!     .language(Language::Go)
//!     .port(9090)
//!     .build()?;
//!
//! // 2. Use application service (with injected adapters)
//! let service = ScaffoldService::new(renderer, filesystem);
//! let request = ScaffoldRequest {
//!     config,
//!     target_dir: "demo".into(),
//!     template: "go".into(),
//!     overwrite: false,
//! };
//! service.scaffold(&request, &reporter)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        RenderPolicy, ScaffoldReport, ScaffoldRequest, ScaffoldService, TemplateInfo,
        TemplateService,
        ports::{Filesystem, ProgressReporter, TemplateRenderer},
    };
    pub use crate::domain::{
        FileSet, Language, Port, ProjectConfig, ProjectConfigBuilder, ProjectName,
        TemplateFamily, Version,
    };
    pub use crate::error::{DeployError, DeployResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
