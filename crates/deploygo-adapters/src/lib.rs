//! Infrastructure adapters for DeployGo.
//!
//! This crate implements the ports defined in
//! `deploygo_core::application::ports`. All filesystem I/O and the template
//! engine live here.

pub mod filesystem;
pub mod renderer;
pub mod reporter;

pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::HandlebarsRenderer;
pub use reporter::{SilentReporter, TracingReporter};
