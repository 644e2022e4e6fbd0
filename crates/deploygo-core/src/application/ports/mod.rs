//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `deploygo-adapters` and the
//! CLI implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory lifecycle and file creation
//!   - `TemplateRenderer`: placeholder substitution
//!   - `ProgressReporter`: per-file notifications

pub mod output;

pub use output::{Filesystem, ProgressReporter, TemplateRenderer};
