//! Progress reporter adapters.

use std::path::Path;

use tracing::info;

use deploygo_core::application::ports::ProgressReporter;

/// Discards progress notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn file_created(&self, _path: &Path) {}
}

/// Emits one `info` event per created file.
///
/// Used when stdout must stay clean (`init --quiet`).
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ProgressReporter for TracingReporter {
    fn file_created(&self, path: &Path) {
        info!(path = %path.display(), "Created file");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HandlebarsRenderer, MemoryFilesystem};
    use deploygo_core::{
        application::{ScaffoldRequest, ScaffoldService},
        domain::ProjectConfig,
    };

    #[test]
    fn tracing_reporter_drives_a_full_scaffold() {
        let fs = MemoryFilesystem::new();
        let service = ScaffoldService::new(
            Box::new(HandlebarsRenderer::new()),
            Box::new(fs.clone()),
        );
        let request = ScaffoldRequest {
            config: ProjectConfig::builder().project_name("demo").build().unwrap(),
            target_dir: "demo".into(),
            template: "go".into(),
            overwrite: false,
        };

        let report = service.scaffold(&request, &TracingReporter).unwrap();

        assert_eq!(report.written.len(), fs.list_files().len());
    }
}
