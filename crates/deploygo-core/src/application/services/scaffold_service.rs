//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Resolve the template family for the selector
//! 2. Build the family's file set for the configuration
//! 3. Prepare the target directory (create, or clear when authorized)
//! 4. Render and write every file, stopping at the first failure
//!
//! Files written before a failure stay on disk; there is no rollback.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ProgressReporter, TemplateRenderer},
    },
    domain::{FileSet, FileTemplate, ProjectConfig, TemplateFamily},
    error::DeployResult,
};

/// What to do when a file's template text cannot be rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderPolicy {
    /// Write the raw, unsubstituted template text and keep going.
    #[default]
    Lenient,
    /// Abort with `TemplateExecutionFailed`.
    Strict,
}

/// One scaffold invocation.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub config: ProjectConfig,
    /// Directory that will hold the generated files.
    pub target_dir: PathBuf,
    /// Template family selector, e.g. `"go"`.
    pub template: String,
    /// Authorizes recursive removal of an existing `target_dir`.
    pub overwrite: bool,
}

/// Outcome of a successful scaffold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub family: TemplateFamily,
    pub target_dir: PathBuf,
    pub written: Vec<WrittenFile>,
}

impl ScaffoldReport {
    /// Files whose template failed to render and were written verbatim.
    pub fn raw_fallbacks(&self) -> impl Iterator<Item = &Path> {
        self.written
            .iter()
            .filter(|f| f.raw_fallback)
            .map(|f| f.path.as_path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub raw_fallback: bool,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    policy: RenderPolicy,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters and the
    /// lenient render policy.
    pub fn new(renderer: Box<dyn TemplateRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
            policy: RenderPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: RenderPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> RenderPolicy {
        self.policy
    }

    /// Resolve a selector and build its file set without touching disk.
    pub fn plan(template: &str, config: &ProjectConfig) -> DeployResult<(TemplateFamily, FileSet)> {
        let family = TemplateFamily::from_selector(template)?;
        let file_set = family.build_file_set(config);
        file_set.validate()?;
        Ok((family, file_set))
    }

    /// Scaffold a new project.
    ///
    /// The selector is resolved before the filesystem is touched, so an
    /// unsupported template never mutates anything.
    #[instrument(
        skip_all,
        fields(
            project = %request.config.project_name(),
            template = %request.template,
            target = %request.target_dir.display(),
            overwrite = request.overwrite,
        )
    )]
    pub fn scaffold(
        &self,
        request: &ScaffoldRequest,
        reporter: &dyn ProgressReporter,
    ) -> DeployResult<ScaffoldReport> {
        let (family, file_set) = Self::plan(&request.template, &request.config)?;
        info!(%family, files = file_set.len(), "Template family resolved");

        self.prepare_directory(&request.target_dir, request.overwrite)?;

        let written =
            self.write_file_set(&file_set, &request.config, &request.target_dir, reporter)?;

        info!(files = written.len(), "Scaffold completed successfully");
        Ok(ScaffoldReport {
            family,
            target_dir: request.target_dir.clone(),
            written,
        })
    }

    /// Make sure `path` exists as a fresh, empty directory.
    ///
    /// An existing path is only removed when `overwrite` is set. Removal is
    /// not transactional: if it fails midway, the old contents are not
    /// restored.
    #[instrument(skip_all, fields(path = %path.display(), overwrite = overwrite))]
    pub fn prepare_directory(&self, path: &Path, overwrite: bool) -> DeployResult<()> {
        if self.filesystem.exists(path) {
            if !overwrite {
                return Err(ApplicationError::AlreadyExists {
                    path: path.to_path_buf(),
                }
                .into());
            }
            warn!("Removing existing directory before regeneration");
            self.filesystem.remove_all(path)?;
        }

        self.filesystem.create_dir_all(path)?;
        debug!("Target directory ready");
        Ok(())
    }

    /// Render and write every entry of `file_set` below `target_dir`.
    ///
    /// Entries are processed in order and the first error stops the loop.
    /// Each entry is rendered before its file is created, so a strict-policy
    /// render failure leaves no empty file behind.
    pub fn write_file_set(
        &self,
        file_set: &FileSet,
        config: &ProjectConfig,
        target_dir: &Path,
        reporter: &dyn ProgressReporter,
    ) -> DeployResult<Vec<WrittenFile>> {
        let mut written = Vec::with_capacity(file_set.len());

        for entry in file_set.files() {
            let destination = entry.path.under(target_dir);

            if let Some(parent) = destination.parent() {
                self.filesystem.create_dir_all(parent)?;
            }

            let (content, raw_fallback) = self.render_entry(entry, config)?;
            let mut file = self.filesystem.create_file(&destination)?;

            file.write_all(content.as_bytes())
                .and_then(|()| file.flush())
                .map_err(|e| ApplicationError::FileWriteFailed {
                    path: destination.clone(),
                    reason: e.to_string(),
                })?;
            drop(file);

            debug!(path = %destination.display(), bytes = content.len(), "File written");
            reporter.file_created(&destination);
            written.push(WrittenFile {
                path: destination,
                raw_fallback,
            });
        }

        Ok(written)
    }

    /// Render one entry, falling back to its raw text under the lenient
    /// policy. The flag is `true` when the fallback was taken.
    fn render_entry<'a>(
        &self,
        entry: &'a FileTemplate,
        config: &ProjectConfig,
    ) -> DeployResult<(Cow<'a, str>, bool)> {
        let name = entry.path.to_string();
        match self.renderer.render(&name, &entry.content, config) {
            Ok(rendered) => Ok((Cow::Owned(rendered), false)),
            Err(e) if e.is_recoverable() && self.policy == RenderPolicy::Lenient => {
                warn!(template = %name, error = %e, "Template failed to render; writing raw content");
                Ok((Cow::Borrowed(entry.content.as_str()), true))
            }
            Err(e) => Err(e),
        }
    }
}
